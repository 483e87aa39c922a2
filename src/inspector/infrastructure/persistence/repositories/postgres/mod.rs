pub(crate) mod connection;
pub mod sqlx_catalog_repository_impl;
pub mod sqlx_comment_mutation_repository_impl;
pub mod sqlx_metadata_cache_repository_impl;
pub mod sqlx_statement_execution_repository_impl;
