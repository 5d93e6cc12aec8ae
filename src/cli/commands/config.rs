use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let config = crate::config::config();
    let message = format!("Effective configuration ({:?})", config.environment);
    output_success(output_format, &message, serde_json::to_value(config)?)
}
