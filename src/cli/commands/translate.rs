use clap::{Args, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

use crate::api::models::{ApiOperatorType, OperationRead};
use crate::cli::utils::{output_error, output_success, read_json_input};
use crate::cli::OutputFormat;
use crate::database::models::SyncOperation;
use crate::error::ApiError;
use crate::services::{OperationError, OperationTranslator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// API read model -> persisted document
    Internal,
    /// Persisted document -> API read model
    External,
}

#[derive(Debug, Args)]
pub struct TranslateArgs {
    #[arg(help = "JSON document to translate, or - for stdin")]
    pub file: PathBuf,

    #[arg(long, value_enum, default_value = "internal", help = "Target representation")]
    pub to: Direction,
}

pub async fn handle(args: TranslateArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let input = read_json_input(&args.file)?;

    match translate(input, args.to) {
        Ok(data) => output_success(output_format, "Translated operation", data),
        Err(e) => {
            let message = e.to_string();
            output_error(output_format, &ApiError::from(e))?;
            anyhow::bail!(message)
        }
    }
}

/// Run the translator over one document in the given direction
pub fn translate(input: Value, direction: Direction) -> Result<Value, OperationError> {
    let translator = OperationTranslator::new()?;
    let malformed = |e: serde_json::Error| OperationError::validation("document", e.to_string());

    match direction {
        Direction::Internal => {
            // Surface an unknown discriminator as itself rather than as a malformed document
            if let Some(symbol) = input
                .pointer("/operatorConfiguration/operatorType")
                .and_then(Value::as_str)
            {
                symbol.parse::<ApiOperatorType>()?;
            }
            let read: OperationRead = serde_json::from_value(input).map_err(malformed)?;
            let operation = translator.to_internal(&read)?;
            serde_json::to_value(operation).map_err(|e| OperationError::Persistence(e.to_string()))
        }
        Direction::External => {
            let operation: SyncOperation = serde_json::from_value(input).map_err(malformed)?;
            let read = translator.to_external(&operation)?;
            serde_json::to_value(read).map_err(|e| OperationError::Persistence(e.to_string()))
        }
    }
}
