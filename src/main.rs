use axum::Router;
use dotenvy::dotenv;
use schema_inspector_api::{
    config::app_config::AppConfig,
    inspector::{
        build_inspector_router,
        interfaces::rest::resources::{
            connection_parameters_resource::ConnectionParametersResource,
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
    },
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        schema_inspector_api::inspector::interfaces::rest::controllers::inspector_rest_controller::list_tables,
        schema_inspector_api::inspector::interfaces::rest::controllers::inspector_rest_controller::table_details,
        schema_inspector_api::inspector::interfaces::rest::controllers::inspector_rest_controller::execute_query,
        schema_inspector_api::inspector::interfaces::rest::controllers::inspector_rest_controller::update_column_comment
    ),
    components(
        schemas(
            ConnectionParametersResource,
            ListTablesRequestResource,
            TableDetailsRequestResource,
            ExecuteQueryRequestResource,
            UpdateColumnCommentRequestResource,
            TableListResponseResource,
            TableSchemaResponseResource,
            ColumnDescriptorResource,
            QueryResultResponseResource,
            StatusResponseResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "inspector", description = "Relational schema introspection and generic SQL execution")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    let inspector_router = build_inspector_router(&config);

    let app = Router::new()
        .merge(inspector_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    log::info!("server listening on http://localhost:{}", config.port);
    log::info!(
        "swagger ui available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
