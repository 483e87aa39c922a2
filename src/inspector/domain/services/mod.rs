pub mod inspector_command_service;
pub mod inspector_query_service;
