use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::database::models::{Connection, SyncOperation};
use crate::database::repository::{ConfigRepository, RepositoryError};

type Documents = Arc<RwLock<BTreeMap<Uuid, Value>>>;

/// In-process repository that keeps every record as its persisted JSON document.
///
/// Records go through the same serialized form a durable store would hold, so
/// shape violations surface on read exactly as they would from disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    operations: Documents,
    connections: Documents,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw operation document as-is, bypassing serialization
    pub async fn insert_raw_operation(&self, operation_id: Uuid, document: Value) {
        self.operations.write().await.insert(operation_id, document);
    }

    pub async fn operation_count(&self) -> usize {
        self.operations.read().await.len()
    }

    async fn read_one<T: DeserializeOwned>(
        documents: &Documents,
        id: Uuid,
    ) -> Result<Option<T>, RepositoryError> {
        let guard = documents.read().await;
        match guard.get(&id) {
            Some(doc) => Ok(Some(serde_json::from_value(doc.clone())?)),
            None => Ok(None),
        }
    }

    async fn read_all<T: DeserializeOwned>(documents: &Documents) -> Result<Vec<T>, RepositoryError> {
        let guard = documents.read().await;
        guard
            .values()
            .map(|doc| serde_json::from_value(doc.clone()).map_err(RepositoryError::from))
            .collect()
    }

    async fn write_one<T: Serialize>(
        documents: &Documents,
        id: Uuid,
        record: &T,
    ) -> Result<(), RepositoryError> {
        let doc = serde_json::to_value(record)?;
        documents.write().await.insert(id, doc);
        Ok(())
    }
}

#[async_trait]
impl ConfigRepository for MemoryRepository {
    async fn get_sync_operation(&self, operation_id: Uuid) -> Result<SyncOperation, RepositoryError> {
        Self::read_one(&self.operations, operation_id)
            .await?
            .ok_or_else(|| RepositoryError::operation_not_found(operation_id))
    }

    async fn write_sync_operation(&self, operation: &SyncOperation) -> Result<(), RepositoryError> {
        Self::write_one(&self.operations, operation.operation_id, operation).await?;
        debug!("Stored operation document: {}", operation.operation_id);
        Ok(())
    }

    async fn list_sync_operations(&self) -> Result<Vec<SyncOperation>, RepositoryError> {
        Self::read_all(&self.operations).await
    }

    async fn get_connection(&self, connection_id: Uuid) -> Result<Connection, RepositoryError> {
        Self::read_one(&self.connections, connection_id)
            .await?
            .ok_or_else(|| RepositoryError::connection_not_found(connection_id))
    }

    async fn write_connection(&self, connection: &Connection) -> Result<(), RepositoryError> {
        Self::write_one(&self.connections, connection.connection_id, connection).await?;
        debug!("Stored connection document: {}", connection.connection_id);
        Ok(())
    }

    async fn list_connections(&self) -> Result<Vec<Connection>, RepositoryError> {
        Self::read_all(&self.connections).await
    }
}
