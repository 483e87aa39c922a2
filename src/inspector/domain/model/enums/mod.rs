pub mod inspector_domain_error;
pub mod metadata_cache_mode;
