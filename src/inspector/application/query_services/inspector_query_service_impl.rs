use std::sync::Arc;

use async_trait::async_trait;

use crate::inspector::{
    domain::{
        model::{
            entities::{
                generic_result_set::GenericResultSet, metadata_record::MetadataRecord,
                table_introspection_report::TableIntrospectionReport,
            },
            enums::inspector_domain_error::InspectorDomainError,
            queries::{
                execute_statement_query::ExecuteStatementQuery,
                list_tables_query::ListTablesQuery, table_details_query::TableDetailsQuery,
            },
        },
        services::inspector_query_service::InspectorQueryService,
    },
    infrastructure::persistence::repositories::{
        catalog_repository::CatalogRepository,
        metadata_cache_repository::MetadataCacheRepository,
        statement_execution_repository::StatementExecutionRepository,
    },
};

pub struct InspectorQueryServiceImpl {
    catalog_repository: Arc<dyn CatalogRepository>,
    statement_execution_repository: Arc<dyn StatementExecutionRepository>,
    metadata_cache_repository: Arc<dyn MetadataCacheRepository>,
}

impl InspectorQueryServiceImpl {
    pub fn new(
        catalog_repository: Arc<dyn CatalogRepository>,
        statement_execution_repository: Arc<dyn StatementExecutionRepository>,
        metadata_cache_repository: Arc<dyn MetadataCacheRepository>,
    ) -> Self {
        Self {
            catalog_repository,
            statement_execution_repository,
            metadata_cache_repository,
        }
    }
}

#[async_trait]
impl InspectorQueryService for InspectorQueryServiceImpl {
    async fn handle_list_tables(
        &self,
        query: ListTablesQuery,
    ) -> Result<Vec<String>, InspectorDomainError> {
        self.catalog_repository
            .list_tables(query.connection())
            .await
    }

    async fn handle_table_details(
        &self,
        query: TableDetailsQuery,
    ) -> Result<TableIntrospectionReport, InspectorDomainError> {
        let schema = self
            .catalog_repository
            .introspect_table(query.connection(), query.table_name())
            .await?;

        // The cache write is secondary: its failure is reported alongside
        // the schema, never instead of it.
        let record = MetadataRecord::derive_from(&schema);
        let metadata_error = match self
            .metadata_cache_repository
            .record_introspection(query.connection(), &record, query.cache_mode())
            .await
        {
            Ok(()) => None,
            Err(error) => {
                log::warn!(
                    "metadata cache write failed for table {}: {error}",
                    schema.table_name
                );
                Some(error.to_string())
            }
        };

        Ok(TableIntrospectionReport {
            schema,
            metadata_error,
        })
    }

    async fn handle_execute_statement(
        &self,
        query: ExecuteStatementQuery,
    ) -> Result<GenericResultSet, InspectorDomainError> {
        self.statement_execution_repository
            .execute_statement(query.connection(), query.statement())
            .await
    }
}
