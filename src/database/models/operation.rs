use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::types::ClosedEnum;

/// Persisted operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatorType {
    Normalization,
    Dbt,
}

impl ClosedEnum for OperatorType {
    const NAME: &'static str = "OperatorType";
    const VARIANTS: &'static [Self] = &[OperatorType::Normalization, OperatorType::Dbt];

    fn symbol(self) -> &'static str {
        match self {
            OperatorType::Normalization => "NORMALIZATION",
            OperatorType::Dbt => "DBT",
        }
    }
}

/// Persisted normalization modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NormalizationOption {
    Basic,
}

impl ClosedEnum for NormalizationOption {
    const NAME: &'static str = "NormalizationOption";
    const VARIANTS: &'static [Self] = &[NormalizationOption::Basic];

    fn symbol(self) -> &'static str {
        match self {
            NormalizationOption::Basic => "BASIC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationConfig {
    pub option: NormalizationOption,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbtConfig {
    pub git_repo_url: String,
    pub git_repo_branch: String,
    pub docker_image: String,
    pub dbt_arguments: String,
}

/// Operator configuration; exactly one branch exists at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    Normalization(NormalizationConfig),
    Dbt(DbtConfig),
}

impl Operator {
    pub fn operator_type(&self) -> OperatorType {
        match self {
            Operator::Normalization(_) => OperatorType::Normalization,
            Operator::Dbt(_) => OperatorType::Dbt,
        }
    }
}

/// Errors raised when a persisted document does not describe a valid operation
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Operator type {0:?} is missing its configuration")]
    MissingConfiguration(OperatorType),
    #[error("Operator type {0:?} carries a configuration for another operator")]
    ConflictingConfiguration(OperatorType),
}

/// A sync operation as owned by the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedSyncOperation", into = "PersistedSyncOperation")]
pub struct SyncOperation {
    pub operation_id: Uuid,
    pub name: String,
    pub operator: Operator,
    pub tombstone: bool,
}

impl SyncOperation {
    /// New live operation
    pub fn new(operation_id: Uuid, name: impl Into<String>, operator: Operator) -> Self {
        Self {
            operation_id,
            name: name.into(),
            operator,
            tombstone: false,
        }
    }

    pub fn operator_type(&self) -> OperatorType {
        self.operator.operator_type()
    }

    pub fn normalization_config(&self) -> Option<&NormalizationConfig> {
        match &self.operator {
            Operator::Normalization(config) => Some(config),
            Operator::Dbt(_) => None,
        }
    }

    pub fn dbt_config(&self) -> Option<&DbtConfig> {
        match &self.operator {
            Operator::Dbt(config) => Some(config),
            Operator::Normalization(_) => None,
        }
    }

    /// Copy of this operation with the tombstone set
    pub fn with_tombstone(mut self, tombstone: bool) -> Self {
        self.tombstone = tombstone;
        self
    }
}

/// Flattened document layout: the unused configuration is stored as null
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSyncOperation {
    operation_id: Uuid,
    name: String,
    operator_type: OperatorType,
    operator_normalization: Option<NormalizationConfig>,
    operator_dbt: Option<DbtConfig>,
    #[serde(default)]
    tombstone: bool,
}

impl From<SyncOperation> for PersistedSyncOperation {
    fn from(op: SyncOperation) -> Self {
        let operator_type = op.operator_type();
        let (operator_normalization, operator_dbt) = match op.operator {
            Operator::Normalization(config) => (Some(config), None),
            Operator::Dbt(config) => (None, Some(config)),
        };
        Self {
            operation_id: op.operation_id,
            name: op.name,
            operator_type,
            operator_normalization,
            operator_dbt,
            tombstone: op.tombstone,
        }
    }
}

impl TryFrom<PersistedSyncOperation> for SyncOperation {
    type Error = ModelError;

    fn try_from(doc: PersistedSyncOperation) -> Result<Self, Self::Error> {
        let operator = match (doc.operator_type, doc.operator_normalization, doc.operator_dbt) {
            (OperatorType::Normalization, Some(config), None) => Operator::Normalization(config),
            (OperatorType::Dbt, None, Some(config)) => Operator::Dbt(config),
            (kind, None, None) => return Err(ModelError::MissingConfiguration(kind)),
            (OperatorType::Normalization, None, Some(_)) => {
                return Err(ModelError::MissingConfiguration(OperatorType::Normalization))
            }
            (OperatorType::Dbt, Some(_), None) => {
                return Err(ModelError::MissingConfiguration(OperatorType::Dbt))
            }
            (kind, Some(_), Some(_)) => return Err(ModelError::ConflictingConfiguration(kind)),
        };

        Ok(Self {
            operation_id: doc.operation_id,
            name: doc.name,
            operator,
            tombstone: doc.tombstone,
        })
    }
}
