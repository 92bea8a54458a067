//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the exporter using clap.
//! Running without a subcommand performs one scheduled export pass configured
//! entirely from the environment.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::Path;

/// Log Exporter - CloudWatch Logs to S3 export job
#[derive(Parser, Debug)]
#[command(name = "log-exporter")]
#[command(version, about, long_about = None)]
#[command(author = "Log Exporter Contributors")]
pub struct Cli {
    /// Path to an optional TOML configuration file
    ///
    /// Read by the subcommands. Running without a subcommand configures the
    /// export from the environment and only applies the file's logging settings.
    #[arg(short, long, env = "LOG_EXPORTER_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The configuration file path, if one was given
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref().map(Path::new)
    }

    /// Whether a configuration file was given but the scheduled run will not read it
    pub fn ignores_config_file(&self) -> bool {
        self.command.is_none() && self.config.is_some()
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every due log group to S3
    #[command(alias = "run")]
    Export(commands::export::ExportArgs),

    /// Validate configuration
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show stored watermarks
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_without_subcommand() {
        let cli = Cli::parse_from(["log-exporter"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["log-exporter", "export"]);
        assert!(matches!(cli.command, Some(Commands::Export(_))));
    }

    #[test]
    fn test_cli_parse_run_alias() {
        let cli = Cli::parse_from(["log-exporter", "run", "--dry-run"]);
        match cli.command {
            Some(Commands::Export(args)) => assert!(args.dry_run),
            other => panic!("expected export command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["log-exporter", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert_eq!(cli.config_path(), Some(Path::new("custom.toml")));
    }

    #[test]
    fn test_config_file_ignored_only_without_subcommand() {
        let scheduled = Cli::parse_from(["log-exporter", "--config", "custom.toml"]);
        assert!(scheduled.ignores_config_file());

        let export = Cli::parse_from(["log-exporter", "--config", "custom.toml", "export"]);
        assert!(!export.ignores_config_file());
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["log-exporter", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["log-exporter", "validate-config"]);
        assert!(matches!(cli.command, Some(Commands::ValidateConfig(_))));
    }

    #[test]
    fn test_cli_parse_status() {
        let cli = Cli::parse_from(["log-exporter", "status", "--log-group", "/app"]);
        match cli.command {
            Some(Commands::Status(args)) => assert_eq!(args.log_group.as_deref(), Some("/app")),
            other => panic!("expected status command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["log-exporter", "init", "--force"]);
        match cli.command {
            Some(Commands::Init(args)) => assert!(args.force),
            other => panic!("expected init command, got {other:?}"),
        }
    }
}
