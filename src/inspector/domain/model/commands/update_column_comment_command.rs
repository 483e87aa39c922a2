use crate::inspector::domain::model::{
    enums::inspector_domain_error::InspectorDomainError,
    value_objects::{
        column_name::ColumnName, connection_parameters::ConnectionParameters,
        table_name::TableName,
    },
};

pub struct UpdateColumnCommentCommandParts {
    pub table_name: String,
    pub column_name: String,
    pub comment: String,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

/// An empty `comment` means "remove the comment", not "set it to the empty
/// string".
#[derive(Clone, Debug)]
pub struct UpdateColumnCommentCommand {
    connection: ConnectionParameters,
    table_name: TableName,
    column_name: ColumnName,
    comment: String,
}

impl UpdateColumnCommentCommand {
    pub fn new(parts: UpdateColumnCommentCommandParts) -> Result<Self, InspectorDomainError> {
        Ok(Self {
            connection: ConnectionParameters::new(
                parts.dbname,
                parts.user,
                parts.password,
                parts.host,
                parts.port,
            )?,
            table_name: TableName::new(parts.table_name)?,
            column_name: ColumnName::new(parts.column_name)?,
            comment: parts.comment,
        })
    }

    pub fn connection(&self) -> &ConnectionParameters {
        &self.connection
    }
    pub fn table_name(&self) -> &TableName {
        &self.table_name
    }
    pub fn column_name(&self) -> &ColumnName {
        &self.column_name
    }
    pub fn comment(&self) -> &str {
        &self.comment
    }
}
