use thiserror::Error;
use uuid::Uuid;

use crate::database::repository::{RecordKind, RepositoryError};
use crate::types::EnumIncompatible;

/// Errors surfaced by the operation services
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: Uuid },

    #[error("Validation error on '{field}': {message}")]
    Validation { field: &'static str, message: String },

    #[error("Unsupported operator type: {0}")]
    UnsupportedOperatorType(String),

    #[error(transparent)]
    EnumIncompatible(#[from] EnumIncompatible),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl OperationError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        OperationError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn operation_not_found(id: Uuid) -> Self {
        OperationError::NotFound {
            kind: RecordKind::Operation,
            id,
        }
    }
}

impl From<RepositoryError> for OperationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { kind, id } => OperationError::NotFound { kind, id },
            other => {
                tracing::error!("Repository failure: {}", other);
                OperationError::Persistence(other.to_string())
            }
        }
    }
}
