/// One introspected column. `ordinal_position` is 1-based and is the sole
/// ordering key; `nullable` carries the catalog's textual "YES"/"NO" flag.
#[derive(Clone, Debug)]
pub struct ColumnDescriptor {
    pub name: String,
    pub data_type: String,
    pub max_length: Option<i32>,
    pub nullable: String,
    pub default_expression: Option<String>,
    pub ordinal_position: i32,
    pub is_primary_key: bool,
    pub comment: String,
}

#[derive(Clone, Debug)]
pub struct TableSchema {
    pub table_name: String,
    pub primary_key_name: Option<String>,
    pub columns: Vec<ColumnDescriptor>,
    pub column_count: i32,
    pub comment: String,
}

impl TableSchema {
    pub fn primary_key_column(&self) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.is_primary_key)
    }
}
