use async_trait::async_trait;

use crate::inspector::domain::model::{
    commands::update_column_comment_command::UpdateColumnCommentCommand,
    enums::inspector_domain_error::InspectorDomainError,
};

#[async_trait]
pub trait InspectorCommandService: Send + Sync {
    async fn handle_update_column_comment(
        &self,
        command: UpdateColumnCommentCommand,
    ) -> Result<(), InspectorDomainError>;
}
