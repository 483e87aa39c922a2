use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use sqlx::{
    Column, Connection, Executor, Row, Statement, TypeInfo, ValueRef,
    postgres::{PgRow, types::Oid},
};
use uuid::Uuid;

use crate::inspector::{
    domain::model::{
        entities::generic_result_set::{GenericResultSet, SQL_NULL_TOKEN},
        enums::inspector_domain_error::InspectorDomainError,
        value_objects::connection_parameters::ConnectionParameters,
    },
    infrastructure::persistence::repositories::{
        postgres::connection::open_connection,
        statement_execution_repository::StatementExecutionRepository,
    },
};

pub struct SqlxStatementExecutionRepositoryImpl;

impl SqlxStatementExecutionRepositoryImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SqlxStatementExecutionRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

fn query_error(error: sqlx::Error) -> InspectorDomainError {
    InspectorDomainError::QueryError(error.to_string())
}

/// Renders one cell to its textual form. SQL NULL becomes the reserved
/// `NULL` token regardless of column type.
fn render_cell(row: &PgRow, index: usize) -> Result<String, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(SQL_NULL_TOKEN.to_string());
    }

    let type_name = raw.type_info().name().to_string();
    match type_name.as_str() {
        "BOOL" => Ok(row.try_get::<bool, _>(index)?.to_string()),
        "INT2" => Ok(row.try_get::<i16, _>(index)?.to_string()),
        "INT4" => Ok(row.try_get::<i32, _>(index)?.to_string()),
        "INT8" => Ok(row.try_get::<i64, _>(index)?.to_string()),
        "OID" => Ok(row.try_get::<Oid, _>(index)?.0.to_string()),
        "FLOAT4" => Ok(row.try_get::<f32, _>(index)?.to_string()),
        "FLOAT8" => Ok(row.try_get::<f64, _>(index)?.to_string()),
        "NUMERIC" => Ok(row.try_get::<Decimal, _>(index)?.to_string()),
        "UUID" => Ok(row.try_get::<Uuid, _>(index)?.to_string()),
        "DATE" => Ok(row.try_get::<NaiveDate, _>(index)?.to_string()),
        "TIME" => Ok(row.try_get::<NaiveTime, _>(index)?.to_string()),
        "TIMESTAMP" => Ok(row.try_get::<NaiveDateTime, _>(index)?.to_string()),
        "TIMESTAMPTZ" => Ok(row.try_get::<DateTime<Utc>, _>(index)?.to_rfc3339()),
        "JSON" | "JSONB" => Ok(row.try_get::<serde_json::Value, _>(index)?.to_string()),
        "BYTEA" => {
            let bytes = row.try_get::<Vec<u8>, _>(index)?;
            let mut rendered = String::with_capacity(2 + bytes.len() * 2);
            rendered.push_str("\\x");
            for byte in bytes {
                rendered.push_str(&format!("{byte:02x}"));
            }
            Ok(rendered)
        }
        "VOID" => {
            row.try_get::<(), _>(index)?;
            Ok(String::new())
        }
        // Text-compatible types decode directly; anything else surfaces the
        // driver's decode error as a QueryError upstream.
        _ => row.try_get::<String, _>(index),
    }
}

fn render_row(row: &PgRow) -> Result<Vec<String>, sqlx::Error> {
    (0..row.len()).map(|index| render_cell(row, index)).collect()
}

#[async_trait]
impl StatementExecutionRepository for SqlxStatementExecutionRepositoryImpl {
    async fn execute_statement(
        &self,
        connection: &ConnectionParameters,
        statement: &str,
    ) -> Result<GenericResultSet, InspectorDomainError> {
        let mut conn = open_connection(connection).await?;
        let mut tx = conn.begin().await.map_err(query_error)?;

        // Preparing first makes result columns visible even for zero-row
        // results; a statement without result columns yields an empty list.
        let prepared = (&mut *tx).prepare(statement).await.map_err(query_error)?;
        let columns = prepared
            .columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect::<Vec<_>>();

        let raw_rows = prepared
            .query()
            .fetch_all(&mut *tx)
            .await
            .map_err(query_error)?;

        tx.commit().await.map_err(query_error)?;

        let mut rows = Vec::with_capacity(raw_rows.len());
        for row in &raw_rows {
            rows.push(render_row(row).map_err(query_error)?);
        }

        Ok(GenericResultSet { columns, rows })
    }
}
