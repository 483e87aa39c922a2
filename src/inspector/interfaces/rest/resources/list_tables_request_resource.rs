use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::inspector::interfaces::rest::resources::connection_parameters_resource::ConnectionParametersResource;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct ListTablesRequestResource {
    #[serde(flatten)]
    #[validate(nested)]
    pub connection: ConnectionParametersResource,
}
