pub mod column_name;
pub mod connection_parameters;
pub mod table_name;
