use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::inspector::interfaces::rest::resources::connection_parameters_resource::ConnectionParametersResource;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct UpdateColumnCommentRequestResource {
    #[validate(length(min = 1))]
    pub table_name: String,
    #[validate(length(min = 1))]
    pub column_name: String,
    /// Empty string clears the comment.
    pub comment: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub connection: ConnectionParametersResource,
}
