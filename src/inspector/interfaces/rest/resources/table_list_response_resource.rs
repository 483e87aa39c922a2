use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TableListResponseResource {
    pub tables: Vec<String>,
    pub status: String,
}
