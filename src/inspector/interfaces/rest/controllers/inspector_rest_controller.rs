use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use validator::Validate;

use crate::inspector::{
    domain::{
        model::{
            commands::update_column_comment_command::{
                UpdateColumnCommentCommand, UpdateColumnCommentCommandParts,
            },
            enums::{
                inspector_domain_error::InspectorDomainError,
                metadata_cache_mode::MetadataCacheMode,
            },
            queries::{
                execute_statement_query::{ExecuteStatementQuery, ExecuteStatementQueryParts},
                list_tables_query::ListTablesQuery,
                table_details_query::{TableDetailsQuery, TableDetailsQueryParts},
            },
        },
        services::{
            inspector_command_service::InspectorCommandService,
            inspector_query_service::InspectorQueryService,
        },
    },
    interfaces::rest::resources::{
        error_response_resource::ErrorResponseResource,
        execute_query_request_resource::ExecuteQueryRequestResource,
        list_tables_request_resource::ListTablesRequestResource,
        query_result_response_resource::QueryResultResponseResource,
        status_response_resource::StatusResponseResource,
        table_details_request_resource::TableDetailsRequestResource,
        table_list_response_resource::TableListResponseResource,
        table_schema_response_resource::{
            ColumnDescriptorResource, TableSchemaResponseResource,
        },
        update_column_comment_request_resource::UpdateColumnCommentRequestResource,
    },
};

const STATUS_SUCCESS: &str = "success";

#[derive(Clone)]
pub struct InspectorRestControllerState {
    pub query_service: Arc<dyn InspectorQueryService>,
    pub command_service: Arc<dyn InspectorCommandService>,
    pub default_cache_mode: MetadataCacheMode,
}

pub fn router(state: InspectorRestControllerState) -> Router {
    Router::new()
        .route("/api/v1/tables", post(list_tables))
        .route("/api/v1/table_details", post(table_details))
        .route("/api/v1/query", post(execute_query))
        .route(
            "/api/v1/update_column_comment",
            post(update_column_comment),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/v1/tables",
    tag = "inspector",
    request_body = ListTablesRequestResource,
    responses(
        (status = 200, description = "User tables of the target database", body = TableListResponseResource),
        (status = 400, description = "Invalid request", body = ErrorResponseResource),
        (status = 404, description = "Catalog query failed", body = ErrorResponseResource),
        (status = 502, description = "Target database unreachable", body = ErrorResponseResource)
    )
)]
pub async fn list_tables(
    State(state): State<InspectorRestControllerState>,
    Json(resource): Json<ListTablesRequestResource>,
) -> Result<Json<TableListResponseResource>, (StatusCode, Json<ErrorResponseResource>)> {
    if let Err(validation_error) = resource.validate() {
        return Err(validation_rejection(validation_error));
    }

    let connection = resource.connection;
    let query = ListTablesQuery::new(
        connection.dbname,
        connection.user,
        connection.password,
        connection.host,
        connection.port,
    )
    .map_err(map_domain_error)?;

    let tables = state
        .query_service
        .handle_list_tables(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(TableListResponseResource {
        tables,
        status: STATUS_SUCCESS.to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/table_details",
    tag = "inspector",
    request_body = TableDetailsRequestResource,
    responses(
        (status = 200, description = "Table schema; may carry metadata_error when the cache write degraded", body = TableSchemaResponseResource),
        (status = 400, description = "Invalid request", body = ErrorResponseResource),
        (status = 404, description = "Table absent or catalog query failed", body = ErrorResponseResource),
        (status = 502, description = "Target database unreachable", body = ErrorResponseResource)
    )
)]
pub async fn table_details(
    State(state): State<InspectorRestControllerState>,
    Json(resource): Json<TableDetailsRequestResource>,
) -> Result<Json<TableSchemaResponseResource>, (StatusCode, Json<ErrorResponseResource>)> {
    if let Err(validation_error) = resource.validate() {
        return Err(validation_rejection(validation_error));
    }

    let cache_mode = match resource.cache_mode.as_deref() {
        Some(raw) => raw.parse().map_err(map_domain_error)?,
        None => state.default_cache_mode,
    };

    let connection = resource.connection;
    let query = TableDetailsQuery::new(TableDetailsQueryParts {
        table_name: resource.table_name,
        dbname: connection.dbname,
        user: connection.user,
        password: connection.password,
        host: connection.host,
        port: connection.port,
        cache_mode,
    })
    .map_err(map_domain_error)?;

    let report = state
        .query_service
        .handle_table_details(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(TableSchemaResponseResource {
        primary_key_name: report.schema.primary_key_name,
        columns: report
            .schema
            .columns
            .into_iter()
            .map(|column| ColumnDescriptorResource {
                name: column.name,
                data_type: column.data_type,
                max_length: column.max_length,
                nullable: column.nullable,
                default: column.default_expression,
                position: column.ordinal_position,
                is_primary_key: column.is_primary_key,
                comment: column.comment,
            })
            .collect(),
        column_count: report.schema.column_count,
        table_comment: report.schema.comment,
        status: STATUS_SUCCESS.to_string(),
        metadata_error: report.metadata_error,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/query",
    tag = "inspector",
    request_body = ExecuteQueryRequestResource,
    responses(
        (status = 200, description = "Uniform columns/rows result; NULL cells render as the literal \"NULL\"", body = QueryResultResponseResource),
        (status = 400, description = "Invalid request or failed statement", body = ErrorResponseResource),
        (status = 502, description = "Target database unreachable", body = ErrorResponseResource)
    )
)]
pub async fn execute_query(
    State(state): State<InspectorRestControllerState>,
    Json(resource): Json<ExecuteQueryRequestResource>,
) -> Result<Json<QueryResultResponseResource>, (StatusCode, Json<ErrorResponseResource>)> {
    if let Err(validation_error) = resource.validate() {
        return Err(validation_rejection(validation_error));
    }

    let connection = resource.connection;
    let query = ExecuteStatementQuery::new(ExecuteStatementQueryParts {
        statement: resource.query,
        dbname: connection.dbname,
        user: connection.user,
        password: connection.password,
        host: connection.host,
        port: connection.port,
    })
    .map_err(map_domain_error)?;

    let result = state
        .query_service
        .handle_execute_statement(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(QueryResultResponseResource {
        columns: result.columns,
        rows: result.rows,
        status: STATUS_SUCCESS.to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/update_column_comment",
    tag = "inspector",
    request_body = UpdateColumnCommentRequestResource,
    responses(
        (status = 200, description = "Comment updated (or cleared when empty)", body = StatusResponseResource),
        (status = 400, description = "Invalid request or failed statement", body = ErrorResponseResource),
        (status = 502, description = "Target database unreachable", body = ErrorResponseResource)
    )
)]
pub async fn update_column_comment(
    State(state): State<InspectorRestControllerState>,
    Json(resource): Json<UpdateColumnCommentRequestResource>,
) -> Result<Json<StatusResponseResource>, (StatusCode, Json<ErrorResponseResource>)> {
    if let Err(validation_error) = resource.validate() {
        return Err(validation_rejection(validation_error));
    }

    let connection = resource.connection;
    let command = UpdateColumnCommentCommand::new(UpdateColumnCommentCommandParts {
        table_name: resource.table_name,
        column_name: resource.column_name,
        comment: resource.comment,
        dbname: connection.dbname,
        user: connection.user,
        password: connection.password,
        host: connection.host,
        port: connection.port,
    })
    .map_err(map_domain_error)?;

    state
        .command_service
        .handle_update_column_comment(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(StatusResponseResource {
        status: STATUS_SUCCESS.to_string(),
    }))
}

fn validation_rejection(
    validation_error: validator::ValidationErrors,
) -> (StatusCode, Json<ErrorResponseResource>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponseResource {
            error: validation_error.to_string(),
        }),
    )
}

fn map_domain_error(
    error: InspectorDomainError,
) -> (StatusCode, Json<ErrorResponseResource>) {
    let status = match error {
        InspectorDomainError::InvalidTableName
        | InspectorDomainError::InvalidColumnName
        | InspectorDomainError::InvalidConnectionParameters
        | InspectorDomainError::EmptyStatement
        | InspectorDomainError::InvalidCacheMode(_)
        | InspectorDomainError::QueryError(_) => StatusCode::BAD_REQUEST,
        InspectorDomainError::SchemaError(_) => StatusCode::NOT_FOUND,
        InspectorDomainError::ConnectionError(_) => StatusCode::BAD_GATEWAY,
        InspectorDomainError::CacheWriteError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponseResource {
            error: error.to_string(),
        }),
    )
}
