pub mod generic_result_set;
pub mod metadata_record;
pub mod table_introspection_report;
pub mod table_schema;
