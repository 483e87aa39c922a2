use crate::inspector::domain::model::{
    enums::inspector_domain_error::InspectorDomainError,
    value_objects::connection_parameters::ConnectionParameters,
};

#[derive(Clone, Debug)]
pub struct ListTablesQuery {
    connection: ConnectionParameters,
}

impl ListTablesQuery {
    pub fn new(
        dbname: String,
        user: String,
        password: String,
        host: String,
        port: u16,
    ) -> Result<Self, InspectorDomainError> {
        Ok(Self {
            connection: ConnectionParameters::new(dbname, user, password, host, port)?,
        })
    }

    pub fn connection(&self) -> &ConnectionParameters {
        &self.connection
    }
}
