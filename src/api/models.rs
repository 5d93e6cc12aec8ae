use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::services::error::OperationError;
use crate::types::ClosedEnum;

/// Operator kinds as exposed to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ApiOperatorType {
    Normalization,
    Dbt,
}

impl ClosedEnum for ApiOperatorType {
    const NAME: &'static str = "ApiOperatorType";
    const VARIANTS: &'static [Self] = &[ApiOperatorType::Normalization, ApiOperatorType::Dbt];

    fn symbol(self) -> &'static str {
        match self {
            ApiOperatorType::Normalization => "normalization",
            ApiOperatorType::Dbt => "dbt",
        }
    }
}

impl FromStr for ApiOperatorType {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.symbol() == s)
            .ok_or_else(|| OperationError::UnsupportedOperatorType(s.to_string()))
    }
}

impl TryFrom<String> for ApiOperatorType {
    type Error = OperationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ApiOperatorType> for String {
    fn from(value: ApiOperatorType) -> Self {
        value.symbol().to_string()
    }
}

/// Normalization modes as exposed to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationOptionEnum {
    Basic,
}

impl ClosedEnum for NormalizationOptionEnum {
    const NAME: &'static str = "NormalizationOptionEnum";
    const VARIANTS: &'static [Self] = &[NormalizationOptionEnum::Basic];

    fn symbol(self) -> &'static str {
        match self {
            NormalizationOptionEnum::Basic => "basic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorNormalization {
    pub option: NormalizationOptionEnum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorDbt {
    pub git_repo_url: String,
    pub git_repo_branch: String,
    pub docker_image: String,
    pub dbt_arguments: String,
}

/// Discriminated operator configuration.
///
/// `operator_type` selects which of `normalization` / `dbt` must be present;
/// the other one must be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorConfiguration {
    pub operator_type: ApiOperatorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalization: Option<OperatorNormalization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbt: Option<OperatorDbt>,
}

impl OperatorConfiguration {
    pub fn normalization(option: NormalizationOptionEnum) -> Self {
        Self {
            operator_type: ApiOperatorType::Normalization,
            normalization: Some(OperatorNormalization { option }),
            dbt: None,
        }
    }

    pub fn dbt(dbt: OperatorDbt) -> Self {
        Self {
            operator_type: ApiOperatorType::Dbt,
            normalization: None,
            dbt: Some(dbt),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationCreate {
    pub name: String,
    pub operator_configuration: OperatorConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationUpdate {
    pub operation_id: Uuid,
    pub name: String,
    pub operator_configuration: OperatorConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRead {
    pub operation_id: Uuid,
    pub name: String,
    pub operator_configuration: OperatorConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationReadList {
    pub operations: Vec<OperationRead>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationIdRequestBody {
    pub operation_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionIdRequestBody {
    pub connection_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckOperationStatus {
    Succeeded,
    Failed,
}

/// Outcome of validating an operator configuration without persisting it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOperationRead {
    pub status: CheckOperationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
