use async_trait::async_trait;

use crate::inspector::domain::model::{
    enums::inspector_domain_error::InspectorDomainError,
    value_objects::{
        column_name::ColumnName, connection_parameters::ConnectionParameters,
        table_name::TableName,
    },
};

#[async_trait]
pub trait CommentMutationRepository: Send + Sync {
    /// Sets the column's descriptive comment; an empty `comment` clears it.
    async fn update_column_comment(
        &self,
        connection: &ConnectionParameters,
        table_name: &TableName,
        column_name: &ColumnName,
        comment: &str,
    ) -> Result<(), InspectorDomainError>;
}
