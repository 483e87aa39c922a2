use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ColumnDescriptorResource {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub max_length: Option<i32>,
    pub nullable: String,
    pub default: Option<String>,
    pub position: i32,
    pub is_primary_key: bool,
    pub comment: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TableSchemaResponseResource {
    pub primary_key_name: Option<String>,
    pub columns: Vec<ColumnDescriptorResource>,
    pub column_count: i32,
    pub table_comment: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_error: Option<String>,
}
