use std::str::FromStr;

use crate::inspector::domain::model::enums::inspector_domain_error::InspectorDomainError;

/// Conflict policy for the per-table metadata cache. `InsertOnce` keeps the
/// first observed snapshot forever; `Upsert` keeps the cache in step with the
/// live schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetadataCacheMode {
    InsertOnce,
    Upsert,
}

impl FromStr for MetadataCacheMode {
    type Err = InspectorDomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "insert_once" => Ok(Self::InsertOnce),
            "upsert" => Ok(Self::Upsert),
            other => Err(InspectorDomainError::InvalidCacheMode(other.to_string())),
        }
    }
}
