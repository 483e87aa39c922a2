use crate::inspector::domain::model::entities::table_schema::TableSchema;

/// Snapshot persisted by the metadata cache, keyed by table name.
/// `search_key` is kept equal to `primary_key` today; the separate field is
/// a seam for future divergence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MetadataRecord {
    pub table_name: String,
    pub primary_key: String,
    pub search_key: String,
    pub comment: String,
    pub num_columns: i32,
}

impl MetadataRecord {
    pub fn derive_from(schema: &TableSchema) -> Self {
        let primary_key = schema.primary_key_name.clone().unwrap_or_default();

        Self {
            table_name: schema.table_name.clone(),
            search_key: primary_key.clone(),
            primary_key,
            comment: schema.comment.clone(),
            num_columns: schema.column_count,
        }
    }
}
