use async_trait::async_trait;
use sqlx::Connection;

use crate::inspector::{
    domain::model::{
        entities::metadata_record::MetadataRecord,
        enums::{
            inspector_domain_error::InspectorDomainError,
            metadata_cache_mode::MetadataCacheMode,
        },
        value_objects::connection_parameters::ConnectionParameters,
    },
    infrastructure::persistence::repositories::{
        metadata_cache_repository::MetadataCacheRepository,
        postgres::connection::open_connection,
    },
};

const CREATE_CACHE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS metadata_table (
        table_name TEXT PRIMARY KEY,
        primary_key TEXT,
        search_key TEXT,
        table_comment TEXT,
        num_columns INTEGER
    )
"#;

// Single atomic statement per mode: concurrent first-time introspections of
// the same table commit at most one record and never conflict.
const INSERT_ONCE_SQL: &str = r#"
    INSERT INTO metadata_table (table_name, primary_key, search_key, table_comment, num_columns)
    VALUES ($1, $2, $3, $4, $5)
    ON CONFLICT (table_name) DO NOTHING
"#;

const UPSERT_SQL: &str = r#"
    INSERT INTO metadata_table (table_name, primary_key, search_key, table_comment, num_columns)
    VALUES ($1, $2, $3, $4, $5)
    ON CONFLICT (table_name)
    DO UPDATE SET
        primary_key = EXCLUDED.primary_key,
        search_key = EXCLUDED.search_key,
        table_comment = EXCLUDED.table_comment,
        num_columns = EXCLUDED.num_columns
"#;

pub struct SqlxMetadataCacheRepositoryImpl;

impl SqlxMetadataCacheRepositoryImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SqlxMetadataCacheRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

fn cache_write_error(error: sqlx::Error) -> InspectorDomainError {
    InspectorDomainError::CacheWriteError(error.to_string())
}

#[async_trait]
impl MetadataCacheRepository for SqlxMetadataCacheRepositoryImpl {
    async fn record_introspection(
        &self,
        connection: &ConnectionParameters,
        record: &MetadataRecord,
        mode: MetadataCacheMode,
    ) -> Result<(), InspectorDomainError> {
        let mut conn = open_connection(connection)
            .await
            .map_err(|e| InspectorDomainError::CacheWriteError(e.to_string()))?;
        let mut tx = conn.begin().await.map_err(cache_write_error)?;

        if let Err(error) = sqlx::query(CREATE_CACHE_TABLE_SQL).execute(&mut *tx).await {
            log::warn!("failed to create metadata cache table: {error}");
            return Err(cache_write_error(error));
        }

        let statement = match mode {
            MetadataCacheMode::InsertOnce => INSERT_ONCE_SQL,
            MetadataCacheMode::Upsert => UPSERT_SQL,
        };

        sqlx::query(statement)
            .bind(&record.table_name)
            .bind(&record.primary_key)
            .bind(&record.search_key)
            .bind(&record.comment)
            .bind(record.num_columns)
            .execute(&mut *tx)
            .await
            .map_err(cache_write_error)?;

        tx.commit().await.map_err(cache_write_error)
    }
}
