use serde_json::json;

use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;
use crate::error::ApiError;
use crate::services::OperationTranslator;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let translator = match OperationTranslator::new() {
        Ok(t) => t,
        Err(e) => {
            let message = e.to_string();
            output_error(output_format, &ApiError::from(e))?;
            anyhow::bail!(message);
        }
    };

    let data = json!({
        "operatorType": pairs_to_json(translator.operator_types().pairs()),
        "normalizationOption": pairs_to_json(translator.normalization_options().pairs()),
    });
    output_success(output_format, "Operator enums are compatible", data)
}

fn pairs_to_json(pairs: Vec<(&'static str, &'static str)>) -> serde_json::Value {
    pairs
        .into_iter()
        .map(|(api, persisted)| json!({ "api": api, "persisted": persisted }))
        .collect()
}
