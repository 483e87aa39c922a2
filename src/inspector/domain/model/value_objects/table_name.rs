use crate::inspector::domain::model::enums::inspector_domain_error::InspectorDomainError;

/// Target table identifier. Catalog lookups bind it as a literal parameter
/// and administrative statements pass it through identifier quoting, so no
/// character allow-list is imposed here.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn new(value: String) -> Result<Self, InspectorDomainError> {
        if value.trim().is_empty() || value.contains('\0') {
            return Err(InspectorDomainError::InvalidTableName);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
