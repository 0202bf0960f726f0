use thiserror::Error;
use uuid::Uuid;

use shared_models::error::AppError;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Chat session {0} not found")]
    SessionNotFound(Uuid),
}

impl From<ChatError> for AppError {
    fn from(error: ChatError) -> Self {
        match error {
            ChatError::SessionNotFound(_) => AppError::NotFound(error.to_string()),
        }
    }
}
