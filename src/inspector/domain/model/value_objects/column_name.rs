use crate::inspector::domain::model::enums::inspector_domain_error::InspectorDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ColumnName(String);

impl ColumnName {
    pub fn new(value: String) -> Result<Self, InspectorDomainError> {
        if value.trim().is_empty() || value.contains('\0') {
            return Err(InspectorDomainError::InvalidColumnName);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
