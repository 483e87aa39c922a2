use std::sync::Arc;

use async_trait::async_trait;

use crate::inspector::{
    domain::{
        model::{
            commands::update_column_comment_command::UpdateColumnCommentCommand,
            enums::inspector_domain_error::InspectorDomainError,
        },
        services::inspector_command_service::InspectorCommandService,
    },
    infrastructure::persistence::repositories::comment_mutation_repository::CommentMutationRepository,
};

pub struct InspectorCommandServiceImpl {
    comment_mutation_repository: Arc<dyn CommentMutationRepository>,
}

impl InspectorCommandServiceImpl {
    pub fn new(comment_mutation_repository: Arc<dyn CommentMutationRepository>) -> Self {
        Self {
            comment_mutation_repository,
        }
    }
}

#[async_trait]
impl InspectorCommandService for InspectorCommandServiceImpl {
    async fn handle_update_column_comment(
        &self,
        command: UpdateColumnCommentCommand,
    ) -> Result<(), InspectorDomainError> {
        self.comment_mutation_repository
            .update_column_comment(
                command.connection(),
                command.table_name(),
                command.column_name(),
                command.comment(),
            )
            .await
    }
}
