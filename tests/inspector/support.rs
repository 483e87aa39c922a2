#[path = "support/fakes.rs"]
pub mod fakes;
#[path = "support/fixtures.rs"]
pub mod fixtures;

pub use fixtures::{
    drifted_orders_schema, execute_statement_query, list_tables_query, orders_schema,
    table_details_query, update_column_comment_command,
};
pub use harness::{create_command_harness, create_query_harness};
