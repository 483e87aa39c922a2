use std::sync::Arc;

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    inspector::{
        application::{
            command_services::inspector_command_service_impl::InspectorCommandServiceImpl,
            query_services::inspector_query_service_impl::InspectorQueryServiceImpl,
        },
        domain::model::enums::metadata_cache_mode::MetadataCacheMode,
        infrastructure::persistence::repositories::postgres::{
            sqlx_catalog_repository_impl::SqlxCatalogRepositoryImpl,
            sqlx_comment_mutation_repository_impl::SqlxCommentMutationRepositoryImpl,
            sqlx_metadata_cache_repository_impl::SqlxMetadataCacheRepositoryImpl,
            sqlx_statement_execution_repository_impl::SqlxStatementExecutionRepositoryImpl,
        },
        interfaces::rest::controllers::inspector_rest_controller::{
            InspectorRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_inspector_router(_config: &AppConfig) -> Router {
    let catalog_repository = Arc::new(SqlxCatalogRepositoryImpl::new());
    let statement_execution_repository = Arc::new(SqlxStatementExecutionRepositoryImpl::new());
    let metadata_cache_repository = Arc::new(SqlxMetadataCacheRepositoryImpl::new());
    let comment_mutation_repository = Arc::new(SqlxCommentMutationRepositoryImpl::new());

    let query_service = Arc::new(InspectorQueryServiceImpl::new(
        catalog_repository,
        statement_execution_repository,
        metadata_cache_repository,
    ));
    let command_service = Arc::new(InspectorCommandServiceImpl::new(comment_mutation_repository));

    router(InspectorRestControllerState {
        query_service,
        command_service,
        default_cache_mode: read_default_cache_mode(),
    })
}

fn read_default_cache_mode() -> MetadataCacheMode {
    std::env::var("INSPECTOR_CACHE_MODE")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(MetadataCacheMode::InsertOnce)
}
