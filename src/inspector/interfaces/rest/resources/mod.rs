pub mod connection_parameters_resource;
pub mod error_response_resource;
pub mod execute_query_request_resource;
pub mod list_tables_request_resource;
pub mod query_result_response_resource;
pub mod status_response_resource;
pub mod table_details_request_resource;
pub mod table_list_response_resource;
pub mod table_schema_response_resource;
pub mod update_column_comment_request_resource;
