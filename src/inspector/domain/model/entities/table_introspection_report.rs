use crate::inspector::domain::model::entities::table_schema::TableSchema;

/// Introspection result plus the optional secondary cache failure. A cache
/// write error never replaces a successful schema, it only annotates it.
#[derive(Clone, Debug)]
pub struct TableIntrospectionReport {
    pub schema: TableSchema,
    pub metadata_error: Option<String>,
}
