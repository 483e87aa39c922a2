use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectorDomainError {
    #[error("table name is invalid")]
    InvalidTableName,

    #[error("column name is invalid")]
    InvalidColumnName,

    #[error("connection parameters are invalid")]
    InvalidConnectionParameters,

    #[error("sql statement is empty")]
    EmptyStatement,

    #[error("unknown metadata cache mode: {0}")]
    InvalidCacheMode(String),

    #[error("connection error: {0}")]
    ConnectionError(String),

    #[error("schema error: {0}")]
    SchemaError(String),

    #[error("query error: {0}")]
    QueryError(String),

    #[error("metadata cache error: {0}")]
    CacheWriteError(String),
}
