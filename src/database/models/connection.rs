use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A data-sync connection and the ordered list of operations it runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub connection_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub operation_ids: Vec<Uuid>,
}

impl Connection {
    pub fn new(connection_id: Uuid, name: impl Into<String>, operation_ids: Vec<Uuid>) -> Self {
        Self {
            connection_id,
            name: name.into(),
            operation_ids,
        }
    }

    pub fn references(&self, operation_id: Uuid) -> bool {
        self.operation_ids.contains(&operation_id)
    }
}
