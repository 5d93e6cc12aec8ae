use clap::Parser;
use sync_operations::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so SYNC_OPS_* settings are picked up
    let _ = dotenvy::dotenv();

    let config = sync_operations::config::config();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();
    for rejected in &config.rejected_overrides {
        tracing::warn!("{}", rejected);
    }
    tracing::debug!("Starting sync-ops in {:?} mode", config.environment);

    let cli = Cli::parse();

    if let Err(e) = sync_operations::cli::run(cli).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
