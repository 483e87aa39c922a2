use async_trait::async_trait;
use sqlx::{Connection, Executor};

use crate::inspector::{
    domain::model::{
        enums::inspector_domain_error::InspectorDomainError,
        value_objects::{
            column_name::ColumnName, connection_parameters::ConnectionParameters,
            table_name::TableName,
        },
    },
    infrastructure::persistence::{
        quoting::{quote_identifier, quote_literal},
        repositories::{
            comment_mutation_repository::CommentMutationRepository,
            postgres::connection::open_connection,
        },
    },
};

pub struct SqlxCommentMutationRepositoryImpl;

impl SqlxCommentMutationRepositoryImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SqlxCommentMutationRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the administrative statement. Identifiers go through quoting, the
/// comment through literal escaping; an empty comment clears the comment.
pub fn comment_on_column_statement(table_name: &str, column_name: &str, comment: &str) -> String {
    let comment_value = if comment.is_empty() {
        "NULL".to_string()
    } else {
        quote_literal(comment)
    };

    format!(
        "COMMENT ON COLUMN {}.{} IS {}",
        quote_identifier(table_name),
        quote_identifier(column_name),
        comment_value
    )
}

fn query_error(error: sqlx::Error) -> InspectorDomainError {
    InspectorDomainError::QueryError(error.to_string())
}

#[async_trait]
impl CommentMutationRepository for SqlxCommentMutationRepositoryImpl {
    async fn update_column_comment(
        &self,
        connection: &ConnectionParameters,
        table_name: &TableName,
        column_name: &ColumnName,
        comment: &str,
    ) -> Result<(), InspectorDomainError> {
        let statement =
            comment_on_column_statement(table_name.value(), column_name.value(), comment);

        let mut conn = open_connection(connection).await?;
        let mut tx = conn.begin().await.map_err(query_error)?;

        // COMMENT ON is a utility statement; run it unprepared.
        (&mut *tx)
            .execute(statement.as_str())
            .await
            .map_err(query_error)?;

        tx.commit().await.map_err(query_error)
    }
}
