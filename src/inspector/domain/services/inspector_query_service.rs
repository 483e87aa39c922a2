use async_trait::async_trait;

use crate::inspector::domain::model::{
    entities::{
        generic_result_set::GenericResultSet,
        table_introspection_report::TableIntrospectionReport,
    },
    enums::inspector_domain_error::InspectorDomainError,
    queries::{
        execute_statement_query::ExecuteStatementQuery, list_tables_query::ListTablesQuery,
        table_details_query::TableDetailsQuery,
    },
};

#[async_trait]
pub trait InspectorQueryService: Send + Sync {
    async fn handle_list_tables(
        &self,
        query: ListTablesQuery,
    ) -> Result<Vec<String>, InspectorDomainError>;

    async fn handle_table_details(
        &self,
        query: TableDetailsQuery,
    ) -> Result<TableIntrospectionReport, InspectorDomainError>;

    async fn handle_execute_statement(
        &self,
        query: ExecuteStatementQuery,
    ) -> Result<GenericResultSet, InspectorDomainError>;
}
