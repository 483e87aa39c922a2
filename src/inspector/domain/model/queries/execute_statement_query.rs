use crate::inspector::domain::model::{
    enums::inspector_domain_error::InspectorDomainError,
    value_objects::connection_parameters::ConnectionParameters,
};

pub struct ExecuteStatementQueryParts {
    pub statement: String,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

/// Caller-supplied SQL, passed through verbatim. Semicolon-separated
/// multi-statement strings are left to the engine to accept or reject.
#[derive(Clone, Debug)]
pub struct ExecuteStatementQuery {
    connection: ConnectionParameters,
    statement: String,
}

impl ExecuteStatementQuery {
    pub fn new(parts: ExecuteStatementQueryParts) -> Result<Self, InspectorDomainError> {
        if parts.statement.trim().is_empty() {
            return Err(InspectorDomainError::EmptyStatement);
        }

        Ok(Self {
            connection: ConnectionParameters::new(
                parts.dbname,
                parts.user,
                parts.password,
                parts.host,
                parts.port,
            )?,
            statement: parts.statement,
        })
    }

    pub fn connection(&self) -> &ConnectionParameters {
        &self.connection
    }
    pub fn statement(&self) -> &str {
        &self.statement
    }
}
