use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// NULL cells carry the literal string "NULL".
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct QueryResultResponseResource {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub status: String,
}
