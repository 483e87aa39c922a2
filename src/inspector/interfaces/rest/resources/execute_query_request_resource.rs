use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::inspector::interfaces::rest::resources::connection_parameters_resource::ConnectionParametersResource;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct ExecuteQueryRequestResource {
    #[validate(length(min = 1))]
    pub query: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub connection: ConnectionParametersResource,
}
