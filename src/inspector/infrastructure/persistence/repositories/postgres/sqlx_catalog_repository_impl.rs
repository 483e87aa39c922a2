use async_trait::async_trait;
use sqlx::{Connection, Row};

use crate::inspector::{
    domain::model::{
        entities::table_schema::{ColumnDescriptor, TableSchema},
        enums::inspector_domain_error::InspectorDomainError,
        value_objects::{connection_parameters::ConnectionParameters, table_name::TableName},
    },
    infrastructure::persistence::repositories::{
        catalog_repository::CatalogRepository, postgres::connection::open_connection,
    },
};

const LIST_TABLES_SQL: &str = r#"
    SELECT table_name::text
    FROM information_schema.tables
    WHERE table_schema = 'public'
        AND table_type = 'BASE TABLE'
    ORDER BY table_name
"#;

const PRIMARY_KEY_SQL: &str = r#"
    SELECT kcu.column_name::text
    FROM information_schema.table_constraints tc
    JOIN information_schema.key_column_usage kcu
        ON tc.constraint_name = kcu.constraint_name
    WHERE tc.table_name = $1
        AND tc.constraint_type = 'PRIMARY KEY'
"#;

const COLUMNS_SQL: &str = r#"
    SELECT
        c.column_name::text,
        c.data_type::text,
        c.character_maximum_length::int AS max_length,
        c.is_nullable::text,
        c.column_default::text,
        c.ordinal_position::int,
        CASE
            WHEN pk.constraint_type = 'PRIMARY KEY' THEN true
            ELSE false
        END AS is_primary_key,
        pgd.description AS column_comment
    FROM information_schema.columns c
    LEFT JOIN (
        SELECT kcu.column_name, tc.constraint_type
        FROM information_schema.table_constraints tc
        JOIN information_schema.key_column_usage kcu
            ON tc.constraint_name = kcu.constraint_name
            AND tc.table_schema = kcu.table_schema
        WHERE tc.table_name = $1
            AND tc.constraint_type = 'PRIMARY KEY'
    ) pk ON c.column_name = pk.column_name
    LEFT JOIN pg_catalog.pg_statio_all_tables st ON st.relname = c.table_name
    LEFT JOIN pg_catalog.pg_description pgd
        ON pgd.objoid = st.relid
        AND pgd.objsubid = c.ordinal_position
    WHERE c.table_name = $1
    ORDER BY c.ordinal_position
"#;

// The regclass cast fails for a table that does not exist, which is what
// turns a bad table name into a SchemaError for the whole introspection.
const TABLE_AGGREGATE_SQL: &str = r#"
    SELECT
        (SELECT count(*)::int
         FROM information_schema.columns
         WHERE table_name = $1) AS column_count,
        obj_description(('public.' || quote_ident($1))::regclass::oid, 'pg_class')
            AS table_comment
"#;

pub struct SqlxCatalogRepositoryImpl;

impl SqlxCatalogRepositoryImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SqlxCatalogRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

fn schema_error(error: sqlx::Error) -> InspectorDomainError {
    InspectorDomainError::SchemaError(error.to_string())
}

#[async_trait]
impl CatalogRepository for SqlxCatalogRepositoryImpl {
    async fn list_tables(
        &self,
        connection: &ConnectionParameters,
    ) -> Result<Vec<String>, InspectorDomainError> {
        let mut conn = open_connection(connection).await?;
        let mut tx = conn.begin().await.map_err(schema_error)?;

        let rows = sqlx::query(LIST_TABLES_SQL)
            .fetch_all(&mut *tx)
            .await
            .map_err(schema_error)?;

        tx.commit().await.map_err(schema_error)?;

        let mut tables = Vec::with_capacity(rows.len());
        for row in rows {
            tables.push(row.try_get::<String, _>(0).map_err(schema_error)?);
        }

        Ok(tables)
    }

    async fn introspect_table(
        &self,
        connection: &ConnectionParameters,
        table_name: &TableName,
    ) -> Result<TableSchema, InspectorDomainError> {
        let mut conn = open_connection(connection).await?;
        let mut tx = conn.begin().await.map_err(schema_error)?;

        // Only the first key column is retained; composite keys are not
        // modeled.
        let primary_key_row = sqlx::query(PRIMARY_KEY_SQL)
            .bind(table_name.value())
            .fetch_optional(&mut *tx)
            .await
            .map_err(schema_error)?;

        let column_rows = sqlx::query(COLUMNS_SQL)
            .bind(table_name.value())
            .fetch_all(&mut *tx)
            .await
            .map_err(schema_error)?;

        let aggregate_row = sqlx::query(TABLE_AGGREGATE_SQL)
            .bind(table_name.value())
            .fetch_one(&mut *tx)
            .await
            .map_err(schema_error)?;

        tx.commit().await.map_err(schema_error)?;

        let primary_key_name = primary_key_row
            .map(|row| row.try_get::<String, _>(0))
            .transpose()
            .map_err(schema_error)?;

        let mut columns = Vec::with_capacity(column_rows.len());
        for row in column_rows {
            columns.push(ColumnDescriptor {
                name: row.try_get("column_name").map_err(schema_error)?,
                data_type: row.try_get("data_type").map_err(schema_error)?,
                max_length: row.try_get("max_length").map_err(schema_error)?,
                nullable: row.try_get("is_nullable").map_err(schema_error)?,
                default_expression: row.try_get("column_default").map_err(schema_error)?,
                ordinal_position: row.try_get("ordinal_position").map_err(schema_error)?,
                is_primary_key: row.try_get("is_primary_key").map_err(schema_error)?,
                comment: row
                    .try_get::<Option<String>, _>("column_comment")
                    .map_err(schema_error)?
                    .unwrap_or_default(),
            });
        }

        let column_count: i32 = aggregate_row.try_get("column_count").map_err(schema_error)?;
        let comment = aggregate_row
            .try_get::<Option<String>, _>("table_comment")
            .map_err(schema_error)?
            .unwrap_or_default();

        Ok(TableSchema {
            table_name: table_name.value().to_string(),
            primary_key_name,
            columns,
            column_count,
            comment,
        })
    }
}
