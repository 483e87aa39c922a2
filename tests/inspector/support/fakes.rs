use std::sync::Mutex;

use async_trait::async_trait;
use schema_inspector_api::inspector::{
    domain::model::{
        entities::{
            generic_result_set::GenericResultSet, metadata_record::MetadataRecord,
            table_schema::TableSchema,
        },
        enums::{
            inspector_domain_error::InspectorDomainError,
            metadata_cache_mode::MetadataCacheMode,
        },
        value_objects::{
            column_name::ColumnName, connection_parameters::ConnectionParameters,
            table_name::TableName,
        },
    },
    infrastructure::persistence::repositories::{
        catalog_repository::CatalogRepository,
        comment_mutation_repository::CommentMutationRepository,
        metadata_cache_repository::MetadataCacheRepository,
        statement_execution_repository::StatementExecutionRepository,
    },
};

use super::fixtures;

#[derive(Default)]
struct FakeCatalogRepositoryState {
    schema: Option<TableSchema>,
    tables: Vec<String>,
    list_calls: usize,
    introspect_calls: usize,
    introspect_should_fail: bool,
}

pub struct FakeCatalogRepository {
    state: Mutex<FakeCatalogRepositoryState>,
}

impl FakeCatalogRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeCatalogRepositoryState {
                schema: Some(fixtures::orders_schema()),
                tables: vec!["customers".to_string(), "orders".to_string()],
                ..FakeCatalogRepositoryState::default()
            }),
        }
    }

    pub fn set_schema(&self, schema: TableSchema) {
        self.state.lock().expect("mutex poisoned").schema = Some(schema);
    }

    pub fn set_introspect_should_fail(&self, value: bool) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .introspect_should_fail = value;
    }

    pub fn introspect_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").introspect_calls
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").list_calls
    }
}

#[async_trait]
impl CatalogRepository for FakeCatalogRepository {
    async fn list_tables(
        &self,
        _connection: &ConnectionParameters,
    ) -> Result<Vec<String>, InspectorDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.list_calls += 1;
        Ok(state.tables.clone())
    }

    async fn introspect_table(
        &self,
        _connection: &ConnectionParameters,
        table_name: &TableName,
    ) -> Result<TableSchema, InspectorDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.introspect_calls += 1;

        if state.introspect_should_fail {
            return Err(InspectorDomainError::SchemaError(format!(
                "relation \"{}\" does not exist",
                table_name.value()
            )));
        }

        state
            .schema
            .clone()
            .ok_or_else(|| InspectorDomainError::SchemaError("no schema configured".to_string()))
    }
}

#[derive(Default)]
struct FakeStatementExecutionRepositoryState {
    result: GenericResultSet,
    last_statement: Option<String>,
    should_fail: bool,
}

pub struct FakeStatementExecutionRepository {
    state: Mutex<FakeStatementExecutionRepositoryState>,
}

impl FakeStatementExecutionRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeStatementExecutionRepositoryState::default()),
        }
    }

    pub fn set_result(&self, result: GenericResultSet) {
        self.state.lock().expect("mutex poisoned").result = result;
    }

    pub fn set_should_fail(&self, value: bool) {
        self.state.lock().expect("mutex poisoned").should_fail = value;
    }

    pub fn last_statement(&self) -> Option<String> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .last_statement
            .clone()
    }
}

#[async_trait]
impl StatementExecutionRepository for FakeStatementExecutionRepository {
    async fn execute_statement(
        &self,
        _connection: &ConnectionParameters,
        statement: &str,
    ) -> Result<GenericResultSet, InspectorDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.last_statement = Some(statement.to_string());

        if state.should_fail {
            return Err(InspectorDomainError::QueryError(
                "syntax error at or near".to_string(),
            ));
        }

        Ok(state.result.clone())
    }
}

#[derive(Default)]
struct FakeMetadataCacheRepositoryState {
    records: Vec<MetadataRecord>,
    calls: usize,
    should_fail: bool,
}

pub struct FakeMetadataCacheRepository {
    state: Mutex<FakeMetadataCacheRepositoryState>,
}

impl FakeMetadataCacheRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeMetadataCacheRepositoryState::default()),
        }
    }

    pub fn set_should_fail(&self, value: bool) {
        self.state.lock().expect("mutex poisoned").should_fail = value;
    }

    pub fn records(&self) -> Vec<MetadataRecord> {
        self.state.lock().expect("mutex poisoned").records.clone()
    }

    pub fn calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").calls
    }
}

#[async_trait]
impl MetadataCacheRepository for FakeMetadataCacheRepository {
    async fn record_introspection(
        &self,
        _connection: &ConnectionParameters,
        record: &MetadataRecord,
        mode: MetadataCacheMode,
    ) -> Result<(), InspectorDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.calls += 1;

        if state.should_fail {
            return Err(InspectorDomainError::CacheWriteError(
                "metadata cache unavailable".to_string(),
            ));
        }

        let existing = state
            .records
            .iter()
            .position(|r| r.table_name == record.table_name);

        match (mode, existing) {
            (MetadataCacheMode::InsertOnce, Some(_)) => {}
            (MetadataCacheMode::Upsert, Some(index)) => state.records[index] = record.clone(),
            (_, None) => state.records.push(record.clone()),
        }

        Ok(())
    }
}

#[derive(Default)]
struct FakeCommentMutationRepositoryState {
    last_mutation: Option<(String, String, String)>,
    should_fail: bool,
}

pub struct FakeCommentMutationRepository {
    state: Mutex<FakeCommentMutationRepositoryState>,
}

impl FakeCommentMutationRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeCommentMutationRepositoryState::default()),
        }
    }

    pub fn set_should_fail(&self, value: bool) {
        self.state.lock().expect("mutex poisoned").should_fail = value;
    }

    pub fn last_mutation(&self) -> Option<(String, String, String)> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .last_mutation
            .clone()
    }
}

#[async_trait]
impl CommentMutationRepository for FakeCommentMutationRepository {
    async fn update_column_comment(
        &self,
        _connection: &ConnectionParameters,
        table_name: &TableName,
        column_name: &ColumnName,
        comment: &str,
    ) -> Result<(), InspectorDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");

        if state.should_fail {
            return Err(InspectorDomainError::QueryError(
                "must be owner of the relation".to_string(),
            ));
        }

        state.last_mutation = Some((
            table_name.value().to_string(),
            column_name.value().to_string(),
            comment.to_string(),
        ));

        Ok(())
    }
}
