pub mod update_column_comment_command;
