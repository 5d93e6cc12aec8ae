use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{Connection, SyncOperation};

/// Kind of record a repository lookup targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Operation,
    Connection,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Operation => write!(f, "Operation"),
            RecordKind::Connection => write!(f, "Connection"),
        }
    }
}

/// Errors from a config repository
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: Uuid },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl RepositoryError {
    pub fn operation_not_found(id: Uuid) -> Self {
        RepositoryError::NotFound {
            kind: RecordKind::Operation,
            id,
        }
    }

    pub fn connection_not_found(id: Uuid) -> Self {
        RepositoryError::NotFound {
            kind: RecordKind::Connection,
            id,
        }
    }
}

/// Durable owner of sync operations and connections.
///
/// Writes are upserts keyed by the record id. Nothing is ever removed through
/// this interface; soft deletion is a write with the tombstone set.
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    async fn get_sync_operation(&self, operation_id: Uuid) -> Result<SyncOperation, RepositoryError>;

    async fn write_sync_operation(&self, operation: &SyncOperation) -> Result<(), RepositoryError>;

    /// All stored operations, tombstoned ones included
    async fn list_sync_operations(&self) -> Result<Vec<SyncOperation>, RepositoryError>;

    async fn get_connection(&self, connection_id: Uuid) -> Result<Connection, RepositoryError>;

    async fn write_connection(&self, connection: &Connection) -> Result<(), RepositoryError>;

    async fn list_connections(&self) -> Result<Vec<Connection>, RepositoryError>;
}
