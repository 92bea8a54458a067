// Log Exporter - CloudWatch Logs to S3 export job
// Copyright (c) 2025 Log Exporter Contributors
// Licensed under the MIT License

use clap::Parser;
use log_exporter::cli::commands::exit_code_for;
use log_exporter::cli::{Cli, Commands};
use log_exporter::config::{load_config, LoggingConfig};
use log_exporter::handler::lambda_handler;
use log_exporter::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the same file and environment the command
    // will read; a configuration error is reported by the command itself.
    let (config_log_level, logging_config) = match load_config(cli.config_path()) {
        Ok(config) => (config.application.log_level, config.logging),
        Err(_) => ("info".to_string(), LoggingConfig::default()),
    };
    let log_level = cli.log_level.clone().unwrap_or(config_log_level);
    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Log Exporter - CloudWatch Logs to S3 export job"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let config_path = cli.config_path();
    match &cli.command {
        Some(Commands::Export(args)) => args.execute(config_path).await,
        Some(Commands::ValidateConfig(args)) => args.execute(config_path).await,
        Some(Commands::Status(args)) => args.execute(config_path).await,
        Some(Commands::Init(args)) => args.execute().await,
        None => {
            if cli.ignores_config_file() {
                tracing::warn!(
                    config = ?config_path,
                    "Configuration file only applies to logging without a subcommand; \
                     use `export` to run with it"
                );
            }
            match lambda_handler(serde_json::Value::Null, serde_json::Value::Null).await {
                Ok(()) => Ok(0),
                Err(e) => {
                    tracing::error!(error = %e, "Scheduled export failed");
                    Ok(exit_code_for(&e))
                }
            }
        }
    }
}
