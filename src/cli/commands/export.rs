//! Export command implementation
//!
//! This module implements the `export` command, one export pass over every
//! log group matching the configured prefixes.

use super::exit_code_for;
use crate::config::load_config;
use crate::core::export::ExportSummary;
use crate::handler::run_with_prefixes;
use clap::Args;
use std::path::Path;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Dry run mode - evaluate log groups without creating export tasks or writing watermarks
    #[arg(long)]
    pub dry_run: bool,

    /// Override log group prefix(es) to export (comma-separated)
    #[arg(long)]
    pub prefix: Option<String>,
}

impl ExportArgs {
    /// Prefixes given on the command line, if any
    pub fn prefixes(&self) -> Option<Vec<String>> {
        self.prefix.as_ref().map(|prefixes| {
            prefixes
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
    }

    /// Execute the export command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.export.dry_run = true;
        }

        let prefixes = self.prefixes();
        if let Some(prefixes) = &prefixes {
            tracing::info!(prefixes = ?prefixes, "Overriding log group prefixes from CLI");
        }

        if config.export.dry_run {
            println!("🔍 DRY RUN MODE - No export tasks will be created");
            println!();
        }

        println!("🚀 Starting export...");
        println!();

        let summary = match run_with_prefixes(config, prefixes).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        print_summary(&summary);

        let exit_code = if summary.aborted {
            println!(
                "❌ Export did not run: {}",
                summary.abort_reason.as_deref().unwrap_or("unknown reason")
            );
            2
        } else if summary.is_successful() {
            println!("✅ Export completed successfully!");
            0
        } else {
            println!("⚠️  Export completed with failures");
            1
        };

        Ok(exit_code)
    }
}

fn print_summary(summary: &ExportSummary) {
    println!();
    println!("📊 Export Summary:");
    println!("  Prefixes: {}", summary.prefixes_processed);
    println!("  Log Groups: {}", summary.total_log_groups);
    if summary.dry_run {
        println!("  Would Export: {}", summary.would_export);
    } else {
        println!("  Exported: {}", summary.exported);
    }
    println!("  Skipped (recent): {}", summary.skipped);
    println!("  Rate Limited: {}", summary.rate_limited);
    println!("  Failed: {}", summary.failed);
    println!("  Export Calls: {}", summary.export_calls);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    if !summary.tasks.is_empty() {
        println!("📦 Export tasks:");
        for task in &summary.tasks {
            println!(
                "  - {} → {} [{}, {})",
                task.log_group, task.task_id, task.window.from_ms, task.window.to_ms
            );
        }
        println!();
    }

    if !summary.errors.is_empty() {
        println!("⚠️  Errors encountered:");
        for error in &summary.errors {
            println!("  - {:?}: {}", error.error_type, error.message);
            if let Some(context) = &error.context {
                println!("    Context: {context}");
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs {
            dry_run: false,
            prefix: None,
        };

        assert!(!args.dry_run);
        assert!(args.prefixes().is_none());
    }

    #[test]
    fn test_export_args_prefix_override() {
        let args = ExportArgs {
            dry_run: true,
            prefix: Some("/app, /aws/lambda/,,".to_string()),
        };

        assert_eq!(
            args.prefixes(),
            Some(vec!["/app".to_string(), "/aws/lambda/".to_string()])
        );
    }
}
