use async_trait::async_trait;

use crate::inspector::domain::model::{
    entities::metadata_record::MetadataRecord,
    enums::{
        inspector_domain_error::InspectorDomainError, metadata_cache_mode::MetadataCacheMode,
    },
    value_objects::connection_parameters::ConnectionParameters,
};

#[async_trait]
pub trait MetadataCacheRepository: Send + Sync {
    /// Ensures the backing cache table exists, then writes `record` under the
    /// given conflict policy. Failures surface as `CacheWriteError` and must
    /// never abort the caller's introspection.
    async fn record_introspection(
        &self,
        connection: &ConnectionParameters,
        record: &MetadataRecord,
        mode: MetadataCacheMode,
    ) -> Result<(), InspectorDomainError>;
}
