use crate::inspector::domain::model::enums::inspector_domain_error::InspectorDomainError;

/// Per-call target database coordinates. Never persisted server-side.
#[derive(Clone, Debug)]
pub struct ConnectionParameters {
    dbname: String,
    user: String,
    password: String,
    host: String,
    port: u16,
}

impl ConnectionParameters {
    pub fn new(
        dbname: String,
        user: String,
        password: String,
        host: String,
        port: u16,
    ) -> Result<Self, InspectorDomainError> {
        let valid =
            !dbname.trim().is_empty() && !user.trim().is_empty() && !host.trim().is_empty();

        if !valid || port == 0 {
            return Err(InspectorDomainError::InvalidConnectionParameters);
        }

        Ok(Self {
            dbname,
            user,
            password,
            host,
            port,
        })
    }

    pub fn dbname(&self) -> &str {
        &self.dbname
    }
    pub fn user(&self) -> &str {
        &self.user
    }
    pub fn password(&self) -> &str {
        &self.password
    }
    pub fn host(&self) -> &str {
        &self.host
    }
    pub fn port(&self) -> u16 {
        self.port
    }
}
