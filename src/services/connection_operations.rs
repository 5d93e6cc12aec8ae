use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::api::models::{ConnectionIdRequestBody, OperationReadList};
use crate::config::DanglingReferencePolicy;
use crate::database::repository::{RecordKind, RepositoryError};
use crate::services::error::OperationError;
use crate::services::operations::OperationsService;

impl OperationsService {
    /// Operations attached to a connection, in the connection's stored order.
    ///
    /// Tombstoned operations are left out unless the service is configured to
    /// include them.
    pub async fn list_operations_for_connection(
        &self,
        request: ConnectionIdRequestBody,
    ) -> Result<OperationReadList, OperationError> {
        let connection = self.repository.get_connection(request.connection_id).await?;

        let mut operations = Vec::with_capacity(connection.operation_ids.len());
        for operation_id in &connection.operation_ids {
            let operation = match self.repository.get_sync_operation(*operation_id).await {
                Ok(operation) => operation,
                Err(RepositoryError::NotFound {
                    kind: RecordKind::Operation,
                    id,
                }) => match self.config.dangling_references {
                    DanglingReferencePolicy::Fail => {
                        tracing::error!(
                            "Connection {} references missing operation {}",
                            connection.connection_id,
                            id
                        );
                        return Err(OperationError::operation_not_found(id));
                    }
                    DanglingReferencePolicy::Skip => {
                        warn!(
                            "Skipping missing operation {} referenced by connection {}",
                            id, connection.connection_id
                        );
                        continue;
                    }
                },
                Err(other) => return Err(other.into()),
            };

            if operation.tombstone && !self.config.include_tombstoned {
                debug!("Skipping tombstoned operation {}", operation.operation_id);
                continue;
            }
            operations.push(self.translator.to_external(&operation)?);
        }

        Ok(OperationReadList { operations })
    }

    /// Detach operations from a connection.
    ///
    /// Each detached operation is tombstoned unless another connection still
    /// references it. The connection keeps the remaining ids in their
    /// stored order. Every id is resolved before the first write, so an
    /// unknown id leaves the store untouched.
    pub async fn delete_operations_for_connection(
        &self,
        connection_id: Uuid,
        operation_ids: &[Uuid],
    ) -> Result<(), OperationError> {
        let mut connection = self.repository.get_connection(connection_id).await?;
        let all_connections = self.repository.list_connections().await?;

        let mut to_tombstone = Vec::with_capacity(operation_ids.len());
        for operation_id in operation_ids {
            let operation = self.repository.get_sync_operation(*operation_id).await?;
            let shared = all_connections
                .iter()
                .any(|c| c.connection_id != connection_id && c.references(*operation_id));
            if shared {
                debug!(
                    "Operation {} still used by another connection; detaching only",
                    operation_id
                );
                continue;
            }
            to_tombstone.push(operation);
        }

        for operation in to_tombstone {
            let operation_id = operation.operation_id;
            self.repository
                .write_sync_operation(&operation.with_tombstone(true))
                .await?;
            info!("Deleted operation {}", operation_id);
        }

        connection.operation_ids.retain(|id| !operation_ids.contains(id));
        self.repository.write_connection(&connection).await?;

        info!(
            "Detached {} operation(s) from connection {}",
            operation_ids.len(),
            connection_id
        );
        Ok(())
    }
}
