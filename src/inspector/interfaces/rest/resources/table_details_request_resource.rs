use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::inspector::interfaces::rest::resources::connection_parameters_resource::ConnectionParametersResource;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct TableDetailsRequestResource {
    #[validate(length(min = 1))]
    pub table_name: String,
    /// "insert_once" (default) or "upsert".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_mode: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub connection: ConnectionParametersResource,
}
