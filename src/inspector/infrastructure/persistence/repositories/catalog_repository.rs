use async_trait::async_trait;

use crate::inspector::domain::model::{
    entities::table_schema::TableSchema,
    enums::inspector_domain_error::InspectorDomainError,
    value_objects::{connection_parameters::ConnectionParameters, table_name::TableName},
};

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_tables(
        &self,
        connection: &ConnectionParameters,
    ) -> Result<Vec<String>, InspectorDomainError>;

    async fn introspect_table(
        &self,
        connection: &ConnectionParameters,
        table_name: &TableName,
    ) -> Result<TableSchema, InspectorDomainError>;
}
