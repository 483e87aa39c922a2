use async_trait::async_trait;

use crate::inspector::domain::model::{
    entities::generic_result_set::GenericResultSet,
    enums::inspector_domain_error::InspectorDomainError,
    value_objects::connection_parameters::ConnectionParameters,
};

#[async_trait]
pub trait StatementExecutionRepository: Send + Sync {
    async fn execute_statement(
        &self,
        connection: &ConnectionParameters,
        statement: &str,
    ) -> Result<GenericResultSet, InspectorDomainError>;
}
