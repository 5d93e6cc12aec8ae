use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::models::{
    CheckOperationRead, CheckOperationStatus, OperationCreate, OperationIdRequestBody, OperationRead,
    OperationUpdate, OperatorConfiguration,
};
use crate::config::OperationsConfig;
use crate::database::models::SyncOperation;
use crate::database::repository::ConfigRepository;
use crate::services::error::OperationError;
use crate::services::id::IdGenerator;
use crate::services::translator::{validate_name, OperationTranslator};

/// Create, update, read and soft-delete sync operations.
///
/// Every call is a sequence of repository round trips; nothing is cached
/// between calls.
pub struct OperationsService {
    pub(crate) repository: Arc<dyn ConfigRepository>,
    pub(crate) translator: OperationTranslator,
    pub(crate) config: OperationsConfig,
    id_generator: Arc<dyn IdGenerator>,
}

impl OperationsService {
    /// Build a service with the operations section of the global config.
    ///
    /// Fails if the API and persisted enums no longer pair up.
    pub fn new(
        repository: Arc<dyn ConfigRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Result<Self, OperationError> {
        let config = crate::config::config().operations.clone();
        Self::with_config(repository, id_generator, config)
    }

    pub fn with_config(
        repository: Arc<dyn ConfigRepository>,
        id_generator: Arc<dyn IdGenerator>,
        config: OperationsConfig,
    ) -> Result<Self, OperationError> {
        Ok(Self {
            repository,
            translator: OperationTranslator::new()?,
            config,
            id_generator,
        })
    }

    pub fn translator(&self) -> &OperationTranslator {
        &self.translator
    }

    /// Validate a configuration without writing anything
    pub fn check_operation(&self, config: &OperatorConfiguration) -> CheckOperationRead {
        match self.translator.operator_to_internal(config) {
            Ok(_) => CheckOperationRead {
                status: CheckOperationStatus::Succeeded,
                message: None,
            },
            Err(e) => CheckOperationRead {
                status: CheckOperationStatus::Failed,
                message: Some(e.to_string()),
            },
        }
    }

    pub async fn create_operation(&self, create: OperationCreate) -> Result<OperationRead, OperationError> {
        validate_name(&create.name)?;
        let operator = self.translator.operator_to_internal(&create.operator_configuration)?;

        let operation_id = self.id_generator.next_id();
        let operation = SyncOperation::new(operation_id, create.name, operator);
        self.repository.write_sync_operation(&operation).await?;

        info!("Created {:?} operation {}", operation.operator_type(), operation_id);
        self.build_operation_read(operation_id).await
    }

    /// Rewrite every field except the id and the tombstone
    pub async fn update_operation(&self, update: OperationUpdate) -> Result<OperationRead, OperationError> {
        let existing = self.repository.get_sync_operation(update.operation_id).await?;

        validate_name(&update.name)?;
        let operator = self.translator.operator_to_internal(&update.operator_configuration)?;

        let replacement = SyncOperation {
            operation_id: existing.operation_id,
            name: update.name,
            operator,
            tombstone: existing.tombstone,
        };
        self.repository.write_sync_operation(&replacement).await?;

        info!(
            "Updated operation {} ({:?} -> {:?})",
            replacement.operation_id,
            existing.operator_type(),
            replacement.operator_type()
        );
        self.build_operation_read(replacement.operation_id).await
    }

    pub async fn get_operation(&self, request: OperationIdRequestBody) -> Result<OperationRead, OperationError> {
        self.build_operation_read(request.operation_id).await
    }

    /// Mark the operation as tombstoned; deleting twice is not an error
    pub async fn delete_operation(&self, request: OperationIdRequestBody) -> Result<(), OperationError> {
        let operation_id = request.operation_id;
        let operation = self.repository.get_sync_operation(operation_id).await?;
        if operation.tombstone {
            debug!("Operation {} already tombstoned", operation_id);
        }
        self.repository
            .write_sync_operation(&operation.with_tombstone(true))
            .await?;

        info!("Deleted operation {}", operation_id);
        Ok(())
    }

    pub(crate) async fn build_operation_read(&self, operation_id: Uuid) -> Result<OperationRead, OperationError> {
        let operation = self.repository.get_sync_operation(operation_id).await?;
        debug!("Loaded operation {}", operation_id);
        self.translator.to_external(&operation)
    }
}
