pub mod execute_statement_query;
pub mod list_tables_query;
pub mod table_details_query;
