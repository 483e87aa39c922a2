use crate::inspector::domain::model::{
    enums::{
        inspector_domain_error::InspectorDomainError, metadata_cache_mode::MetadataCacheMode,
    },
    value_objects::{connection_parameters::ConnectionParameters, table_name::TableName},
};

pub struct TableDetailsQueryParts {
    pub table_name: String,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub cache_mode: MetadataCacheMode,
}

#[derive(Clone, Debug)]
pub struct TableDetailsQuery {
    connection: ConnectionParameters,
    table_name: TableName,
    cache_mode: MetadataCacheMode,
}

impl TableDetailsQuery {
    pub fn new(parts: TableDetailsQueryParts) -> Result<Self, InspectorDomainError> {
        Ok(Self {
            connection: ConnectionParameters::new(
                parts.dbname,
                parts.user,
                parts.password,
                parts.host,
                parts.port,
            )?,
            table_name: TableName::new(parts.table_name)?,
            cache_mode: parts.cache_mode,
        })
    }

    pub fn connection(&self) -> &ConnectionParameters {
        &self.connection
    }
    pub fn table_name(&self) -> &TableName {
        &self.table_name
    }
    pub fn cache_mode(&self) -> MetadataCacheMode {
        self.cache_mode
    }
}
