//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "log-exporter.toml")]
    pub output: String,

    /// Include every option with comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing log exporter configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set S3_BUCKET, SSM_LOG_GROUP_PARAM and AWS_ACCOUNT");
                println!("  2. Store the prefix list, for example:");
                println!(
                    "     aws ssm put-parameter --name /log-exporter/prefixes --type String --value '[\"/app/\"]'"
                );
                println!(
                    "  3. Validate configuration: log-exporter --config {} validate-config",
                    self.output
                );
                println!(
                    "  4. Try a dry run: log-exporter --config {} export --dry-run",
                    self.output
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Log Exporter Configuration File
# CloudWatch Logs to S3 export job

[application]
log_level = "info"

[export]
destination_bucket = "${S3_BUCKET}"
prefixes_parameter = "${SSM_LOG_GROUP_PARAM}"
account_id = "${AWS_ACCOUNT}"
interval_hours = 24

[logging]
format = "text"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Log Exporter Configuration File
# CloudWatch Logs to S3 export job
#
# Every setting has a default. Environment variables override this file:
# S3_BUCKET, SSM_LOG_GROUP_PARAM, AWS_ACCOUNT and the LOG_EXPORTER_* family.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Export Configuration
# ============================================================================
[export]
# Destination S3 bucket (required)
destination_bucket = "${S3_BUCKET}"

# Parameter holding a JSON array of log group prefixes (required)
prefixes_parameter = "${SSM_LOG_GROUP_PARAM}"

# Account id used as the first segment of every S3 key (required)
account_id = "${AWS_ACCOUNT}"

# Parameter path under which per-log-group watermarks are stored
watermark_prefix = "/log-exporter-last-export"

# Minimum hours between exports of the same log group
interval_hours = 24

# Log groups requested per listing page (1-50)
page_size = 50

# Include log groups from linked source accounts
include_linked_accounts = true

# Evaluate eligibility only; create no export tasks and write no watermarks
dry_run = false

# Only one export task may run at a time per account; while the limit is hit,
# retry with a fixed delay up to max_attempts calls per log group
[export.retry]
max_attempts = 10
delay_secs = 5

# ============================================================================
# AWS Configuration
# ============================================================================
[aws]
# Region override (the default provider chain is used when unset)
# region = "eu-west-1"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Console format: text or json
format = "text"

# Enable local JSON file logging
local_enabled = false

# Local log directory
local_path = "/var/log/log-exporter"

# Log rotation (daily, hourly or never)
local_rotation = "daily"
"#
        .to_string()
    }
}
