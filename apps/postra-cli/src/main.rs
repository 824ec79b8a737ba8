//! # Postra CLI
//!
//! Command-line front end for the post registry. State lives in a JSON
//! genesis-format file that is validated on every load.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod commands;
mod config;
mod error;
mod state;
mod telemetry;

use commands::Command;
use config::CliConfig;
use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "postra", version, about = "Manage posts in a local Postra state file")]
struct Cli {
    /// State file to operate on
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Human-readable address prefix
    #[arg(long, global = true)]
    prefix: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::from_env().with_overrides(cli.state, cli.prefix);

    telemetry::init_telemetry(config.json_logs);

    let state = match AppState::load(&config).await {
        Ok(state) => state,
        Err(err) => {
            let response = error::CliError::from(err).to_response();
            println!("{}", serde_json::to_string_pretty(&response)?);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mutates = cli.command.mutates();
    match commands::execute(&state, cli.command).await {
        Ok(output) => {
            if mutates {
                state.persist().await?;
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(error = %err, "Command failed");
            println!("{}", serde_json::to_string_pretty(&err.to_response())?);
            Ok(ExitCode::FAILURE)
        }
    }
}
