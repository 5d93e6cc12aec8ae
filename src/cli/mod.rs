pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "sync-ops")]
#[command(about = "Sync operations CLI - inspect operator mappings and translate operation documents")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Verify that API and persisted operator enums still pair up")]
    Check,

    #[command(about = "Show the effective configuration")]
    Config,

    #[command(about = "Translate an operation document between API and persisted form")]
    Translate(commands::translate::TranslateArgs),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Check => commands::check::handle(output_format).await,
        Commands::Config => commands::config::handle(output_format).await,
        Commands::Translate(args) => commands::translate::handle(args, output_format).await,
    }
}
