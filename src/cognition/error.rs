use crate::model::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CognitionError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Quiz not found: {0}")]
    QuizNotFound(String),

    #[error("Identifier already in use: {0}")]
    IdentifierInUse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

/// Coarse classification of a [`CognitionError`].
///
/// The library never speaks in status codes. A routing layer in front of the
/// store maps these onto its own vocabulary (400, 404, 409, 5xx, exit codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Storage,
}

impl CognitionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CognitionError::Validation(_) => ErrorKind::Validation,
            CognitionError::UserNotFound(_) | CognitionError::QuizNotFound(_) => {
                ErrorKind::NotFound
            }
            CognitionError::IdentifierInUse(_) => ErrorKind::Conflict,
            CognitionError::Io(_) | CognitionError::Serialization(_) | CognitionError::Store(_) => {
                ErrorKind::Storage
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, CognitionError>;
