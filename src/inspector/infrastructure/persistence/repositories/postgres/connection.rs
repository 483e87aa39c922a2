use sqlx::{Connection, PgConnection, postgres::PgConnectOptions};

use crate::inspector::domain::model::{
    enums::inspector_domain_error::InspectorDomainError,
    value_objects::connection_parameters::ConnectionParameters,
};

/// Opens a fresh connection for one unit of work. No pooling: every call is
/// isolated at the connection level and the engine's default isolation
/// applies.
pub(crate) async fn open_connection(
    connection: &ConnectionParameters,
) -> Result<PgConnection, InspectorDomainError> {
    let options = PgConnectOptions::new()
        .host(connection.host())
        .port(connection.port())
        .username(connection.user())
        .password(connection.password())
        .database(connection.dbname());

    PgConnection::connect_with(&options)
        .await
        .map_err(|e| InspectorDomainError::ConnectionError(e.to_string()))
}
