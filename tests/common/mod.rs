#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sync_operations::config::OperationsConfig;
use sync_operations::database::models::{Connection, SyncOperation};
use sync_operations::{
    ConfigRepository, IdGenerator, MemoryRepository, NormalizationOptionEnum, OperationCreate,
    OperationsService, OperatorConfiguration, OperatorDbt, RepositoryError,
};
use uuid::Uuid;

/// Hands out a fixed sequence of ids and records how many were taken
pub struct ScriptedIds {
    ids: Mutex<VecDeque<Uuid>>,
    taken: Mutex<Vec<Uuid>>,
}

impl ScriptedIds {
    pub fn new(ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            ids: Mutex::new(ids.into_iter().collect()),
            taken: Mutex::new(Vec::new()),
        }
    }

    pub fn taken(&self) -> Vec<Uuid> {
        self.taken.lock().unwrap().clone()
    }
}

impl IdGenerator for ScriptedIds {
    fn next_id(&self) -> Uuid {
        let id = self.ids.lock().unwrap().pop_front().expect("scripted ids exhausted");
        self.taken.lock().unwrap().push(id);
        id
    }
}

/// Reads from an inner memory repository; every write fails
pub struct ReadOnlyRepository {
    pub inner: MemoryRepository,
}

#[async_trait]
impl ConfigRepository for ReadOnlyRepository {
    async fn get_sync_operation(&self, operation_id: Uuid) -> Result<SyncOperation, RepositoryError> {
        self.inner.get_sync_operation(operation_id).await
    }

    async fn write_sync_operation(&self, _operation: &SyncOperation) -> Result<(), RepositoryError> {
        Err(RepositoryError::Storage("store is read-only".to_string()))
    }

    async fn list_sync_operations(&self) -> Result<Vec<SyncOperation>, RepositoryError> {
        self.inner.list_sync_operations().await
    }

    async fn get_connection(&self, connection_id: Uuid) -> Result<Connection, RepositoryError> {
        self.inner.get_connection(connection_id).await
    }

    async fn write_connection(&self, _connection: &Connection) -> Result<(), RepositoryError> {
        Err(RepositoryError::Storage("store is read-only".to_string()))
    }

    async fn list_connections(&self) -> Result<Vec<Connection>, RepositoryError> {
        self.inner.list_connections().await
    }
}

/// Accepts writes, then fails every operation read that follows one
pub struct LosesReadsAfterWrite {
    pub inner: MemoryRepository,
    written: AtomicBool,
}

impl LosesReadsAfterWrite {
    pub fn new(inner: MemoryRepository) -> Self {
        Self {
            inner,
            written: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl ConfigRepository for LosesReadsAfterWrite {
    async fn get_sync_operation(&self, operation_id: Uuid) -> Result<SyncOperation, RepositoryError> {
        if self.written.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage("replica unavailable".to_string()));
        }
        self.inner.get_sync_operation(operation_id).await
    }

    async fn write_sync_operation(&self, operation: &SyncOperation) -> Result<(), RepositoryError> {
        self.inner.write_sync_operation(operation).await?;
        self.written.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn list_sync_operations(&self) -> Result<Vec<SyncOperation>, RepositoryError> {
        self.inner.list_sync_operations().await
    }

    async fn get_connection(&self, connection_id: Uuid) -> Result<Connection, RepositoryError> {
        self.inner.get_connection(connection_id).await
    }

    async fn write_connection(&self, connection: &Connection) -> Result<(), RepositoryError> {
        self.inner.write_connection(connection).await
    }

    async fn list_connections(&self) -> Result<Vec<Connection>, RepositoryError> {
        self.inner.list_connections().await
    }
}

pub struct TestContext {
    pub repository: Arc<MemoryRepository>,
    pub ids: Arc<ScriptedIds>,
    pub service: OperationsService,
}

impl TestContext {
    pub fn new(ids: impl IntoIterator<Item = Uuid>) -> Self {
        let repository = Arc::new(MemoryRepository::new());
        let ids = Arc::new(ScriptedIds::new(ids));
        let service = OperationsService::with_config(repository.clone(), ids.clone(), OperationsConfig::default())
            .expect("operator enums should be compatible");
        Self {
            repository,
            ids,
            service,
        }
    }

    /// Context that can create `count` operations
    pub fn with_capacity(count: usize) -> Self {
        Self::new((0..count).map(|_| Uuid::new_v4()))
    }
}

pub fn normalization_create(name: &str) -> OperationCreate {
    OperationCreate {
        name: name.to_string(),
        operator_configuration: OperatorConfiguration::normalization(NormalizationOptionEnum::Basic),
    }
}

pub fn dbt_operator() -> OperatorDbt {
    OperatorDbt {
        git_repo_url: "git_repo_url".to_string(),
        git_repo_branch: "git_repo_branch".to_string(),
        docker_image: "docker".to_string(),
        dbt_arguments: "--full-refresh".to_string(),
    }
}

pub fn dbt_create(name: &str) -> OperationCreate {
    OperationCreate {
        name: name.to_string(),
        operator_configuration: OperatorConfiguration::dbt(dbt_operator()),
    }
}
