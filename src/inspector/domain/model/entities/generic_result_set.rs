/// Textual rendering of SQL NULL in generic results. A text column whose
/// value happens to be the string "NULL" is indistinguishable; this loss is
/// part of the contract.
pub const SQL_NULL_TOKEN: &str = "NULL";

/// Uniform shape for any ad hoc statement result. Every row has exactly
/// `columns.len()` cells; a row-less statement (DDL) has empty `columns`.
#[derive(Clone, Debug, Default)]
pub struct GenericResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
