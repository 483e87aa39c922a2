use schema_inspector_api::inspector::domain::{
    model::enums::inspector_domain_error::InspectorDomainError,
    services::inspector_command_service::InspectorCommandService,
};

use crate::support::{create_command_harness, update_column_comment_command};

#[tokio::test]
async fn handle_update_column_comment_passes_values_through() {
    let harness = create_command_harness();

    harness
        .service
        .handle_update_column_comment(update_column_comment_command("hello"))
        .await
        .expect("mutation should succeed");

    let (table, column, comment) = harness
        .comments
        .last_mutation()
        .expect("mutation should be captured");
    assert_eq!(table, "orders");
    assert_eq!(column, "total");
    assert_eq!(comment, "hello");
}

#[tokio::test]
async fn handle_update_column_comment_keeps_empty_comment_for_clearing() {
    let harness = create_command_harness();

    harness
        .service
        .handle_update_column_comment(update_column_comment_command(""))
        .await
        .expect("mutation should succeed");

    let (_, _, comment) = harness
        .comments
        .last_mutation()
        .expect("mutation should be captured");
    assert_eq!(comment, "");
}

#[tokio::test]
async fn handle_update_column_comment_propagates_query_error() {
    let harness = create_command_harness();
    harness.comments.set_should_fail(true);

    let result = harness
        .service
        .handle_update_column_comment(update_column_comment_command("hello"))
        .await;

    assert!(matches!(result, Err(InspectorDomainError::QueryError(_))));
}
