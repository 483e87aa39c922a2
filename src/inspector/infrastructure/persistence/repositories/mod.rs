pub mod catalog_repository;
pub mod comment_mutation_repository;
pub mod metadata_cache_repository;
pub mod postgres;
pub mod statement_execution_repository;
