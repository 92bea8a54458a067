//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the configuration file and environment.

use crate::config::load_config;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let source = config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "environment".to_string());
        tracing::info!(source = %source, "Validating configuration");

        println!("🔍 Validating configuration from: {source}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let missing = config.missing_required();
        if !missing.is_empty() {
            println!("❌ Required settings are not defined:");
            for name in &missing {
                println!("   - {name}");
            }
            println!();
            return Ok(2);
        }

        let export = &config.export;
        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Destination Bucket: {}",
            export.destination_bucket.as_deref().unwrap_or_default()
        );
        println!(
            "  Prefix Parameter: {}",
            export.prefixes_parameter.as_deref().unwrap_or_default()
        );
        println!(
            "  Account: {}",
            export.account_id.as_deref().unwrap_or_default()
        );
        println!("  Watermark Prefix: {}", export.watermark_prefix);
        println!("  Interval: {}h", export.interval_hours);
        println!(
            "  Retry: {} attempts, {}s apart",
            export.retry.max_attempts, export.retry.delay_secs
        );
        println!(
            "  Region: {}",
            config.aws.region.as_deref().unwrap_or("(default chain)")
        );
        println!("  Dry Run: {}", export.dry_run);
        println!();

        Ok(0)
    }
}
