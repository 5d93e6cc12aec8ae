use crate::api::models::{
    ApiOperatorType, NormalizationOptionEnum, OperationRead, OperatorConfiguration, OperatorDbt,
    OperatorNormalization,
};
use crate::database::models::{
    DbtConfig, NormalizationConfig, NormalizationOption, Operator, OperatorType, SyncOperation,
};
use crate::services::error::OperationError;
use crate::types::EnumTable;

/// Maps operations between the API representation and the persisted one.
///
/// Building a translator validates the enum pairings; a translator that
/// exists can never map a symbol onto the wrong variant.
#[derive(Debug, Clone, Copy)]
pub struct OperationTranslator {
    operator_types: EnumTable<ApiOperatorType, OperatorType>,
    normalization_options: EnumTable<NormalizationOptionEnum, NormalizationOption>,
}

impl OperationTranslator {
    pub fn new() -> Result<Self, OperationError> {
        Ok(Self {
            operator_types: EnumTable::new()?,
            normalization_options: EnumTable::new()?,
        })
    }

    pub fn operator_types(&self) -> &EnumTable<ApiOperatorType, OperatorType> {
        &self.operator_types
    }

    pub fn normalization_options(&self) -> &EnumTable<NormalizationOptionEnum, NormalizationOption> {
        &self.normalization_options
    }

    /// Check an API configuration and build the matching persisted operator
    pub fn operator_to_internal(&self, config: &OperatorConfiguration) -> Result<Operator, OperationError> {
        match self.operator_types.forward(config.operator_type)? {
            OperatorType::Normalization => {
                if config.dbt.is_some() {
                    return Err(OperationError::validation(
                        "dbt",
                        "must be absent when operatorType is normalization",
                    ));
                }
                let normalization = config.normalization.as_ref().ok_or_else(|| {
                    OperationError::validation("normalization", "required when operatorType is normalization")
                })?;
                Ok(Operator::Normalization(NormalizationConfig {
                    option: self.normalization_options.forward(normalization.option)?,
                }))
            }
            OperatorType::Dbt => {
                if config.normalization.is_some() {
                    return Err(OperationError::validation(
                        "normalization",
                        "must be absent when operatorType is dbt",
                    ));
                }
                let dbt = config
                    .dbt
                    .as_ref()
                    .ok_or_else(|| OperationError::validation("dbt", "required when operatorType is dbt"))?;
                if dbt.git_repo_url.trim().is_empty() {
                    return Err(OperationError::validation("dbt.gitRepoUrl", "must not be blank"));
                }
                Ok(Operator::Dbt(DbtConfig {
                    git_repo_url: dbt.git_repo_url.clone(),
                    git_repo_branch: dbt.git_repo_branch.clone(),
                    docker_image: dbt.docker_image.clone(),
                    dbt_arguments: dbt.dbt_arguments.clone(),
                }))
            }
        }
    }

    pub fn operator_to_external(&self, operator: &Operator) -> Result<OperatorConfiguration, OperationError> {
        let operator_type = self.operator_types.backward(operator.operator_type())?;
        let config = match operator {
            Operator::Normalization(normalization) => OperatorConfiguration {
                operator_type,
                normalization: Some(OperatorNormalization {
                    option: self.normalization_options.backward(normalization.option)?,
                }),
                dbt: None,
            },
            Operator::Dbt(dbt) => OperatorConfiguration {
                operator_type,
                normalization: None,
                dbt: Some(OperatorDbt {
                    git_repo_url: dbt.git_repo_url.clone(),
                    git_repo_branch: dbt.git_repo_branch.clone(),
                    docker_image: dbt.docker_image.clone(),
                    dbt_arguments: dbt.dbt_arguments.clone(),
                }),
            },
        };
        Ok(config)
    }

    /// Persisted form of an API read model; the result is never tombstoned
    pub fn to_internal(&self, read: &OperationRead) -> Result<SyncOperation, OperationError> {
        validate_name(&read.name)?;
        let operator = self.operator_to_internal(&read.operator_configuration)?;
        Ok(SyncOperation::new(read.operation_id, read.name.clone(), operator))
    }

    pub fn to_external(&self, operation: &SyncOperation) -> Result<OperationRead, OperationError> {
        Ok(OperationRead {
            operation_id: operation.operation_id,
            name: operation.name.clone(),
            operator_configuration: self.operator_to_external(&operation.operator)?,
        })
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), OperationError> {
    if name.trim().is_empty() {
        return Err(OperationError::validation("name", "must not be blank"));
    }
    Ok(())
}
