use schema_inspector_api::inspector::domain::model::{
    commands::update_column_comment_command::{
        UpdateColumnCommentCommand, UpdateColumnCommentCommandParts,
    },
    entities::table_schema::{ColumnDescriptor, TableSchema},
    enums::metadata_cache_mode::MetadataCacheMode,
    queries::{
        execute_statement_query::{ExecuteStatementQuery, ExecuteStatementQueryParts},
        list_tables_query::ListTablesQuery,
        table_details_query::{TableDetailsQuery, TableDetailsQueryParts},
    },
};

pub const DBNAME: &str = "inventory";
pub const USER: &str = "postgres";
pub const PASSWORD: &str = "postgres";
pub const HOST: &str = "127.0.0.1";
pub const PORT: u16 = 5432;

/// `orders (id serial primary key, total numeric)`.
pub fn orders_schema() -> TableSchema {
    TableSchema {
        table_name: "orders".to_string(),
        primary_key_name: Some("id".to_string()),
        columns: vec![
            ColumnDescriptor {
                name: "id".to_string(),
                data_type: "integer".to_string(),
                max_length: None,
                nullable: "NO".to_string(),
                default_expression: Some("nextval('orders_id_seq'::regclass)".to_string()),
                ordinal_position: 1,
                is_primary_key: true,
                comment: String::new(),
            },
            ColumnDescriptor {
                name: "total".to_string(),
                data_type: "numeric".to_string(),
                max_length: None,
                nullable: "YES".to_string(),
                default_expression: None,
                ordinal_position: 2,
                is_primary_key: false,
                comment: "order total".to_string(),
            },
        ],
        column_count: 2,
        comment: "sales orders".to_string(),
    }
}

/// The same table after a live schema change: renamed key, extra column.
pub fn drifted_orders_schema() -> TableSchema {
    TableSchema {
        table_name: "orders".to_string(),
        primary_key_name: Some("order_id".to_string()),
        columns: vec![
            ColumnDescriptor {
                name: "order_id".to_string(),
                data_type: "bigint".to_string(),
                max_length: None,
                nullable: "NO".to_string(),
                default_expression: None,
                ordinal_position: 1,
                is_primary_key: true,
                comment: String::new(),
            },
            ColumnDescriptor {
                name: "total".to_string(),
                data_type: "numeric".to_string(),
                max_length: None,
                nullable: "YES".to_string(),
                default_expression: None,
                ordinal_position: 2,
                is_primary_key: false,
                comment: String::new(),
            },
            ColumnDescriptor {
                name: "placed_at".to_string(),
                data_type: "timestamp with time zone".to_string(),
                max_length: None,
                nullable: "YES".to_string(),
                default_expression: None,
                ordinal_position: 3,
                is_primary_key: false,
                comment: String::new(),
            },
        ],
        column_count: 3,
        comment: "sales orders v2".to_string(),
    }
}

pub fn list_tables_query() -> ListTablesQuery {
    ListTablesQuery::new(
        DBNAME.to_string(),
        USER.to_string(),
        PASSWORD.to_string(),
        HOST.to_string(),
        PORT,
    )
    .expect("valid query")
}

pub fn table_details_query(cache_mode: MetadataCacheMode) -> TableDetailsQuery {
    TableDetailsQuery::new(TableDetailsQueryParts {
        table_name: "orders".to_string(),
        dbname: DBNAME.to_string(),
        user: USER.to_string(),
        password: PASSWORD.to_string(),
        host: HOST.to_string(),
        port: PORT,
        cache_mode,
    })
    .expect("valid query")
}

pub fn execute_statement_query(statement: &str) -> ExecuteStatementQuery {
    ExecuteStatementQuery::new(ExecuteStatementQueryParts {
        statement: statement.to_string(),
        dbname: DBNAME.to_string(),
        user: USER.to_string(),
        password: PASSWORD.to_string(),
        host: HOST.to_string(),
        port: PORT,
    })
    .expect("valid query")
}

pub fn update_column_comment_command(comment: &str) -> UpdateColumnCommentCommand {
    UpdateColumnCommentCommand::new(UpdateColumnCommentCommandParts {
        table_name: "orders".to_string(),
        column_name: "total".to_string(),
        comment: comment.to_string(),
        dbname: DBNAME.to_string(),
        user: USER.to_string(),
        password: PASSWORD.to_string(),
        host: HOST.to_string(),
        port: PORT,
    })
    .expect("valid command")
}
