//! Configuration management.
//!
//! Configuration comes from three layers, later layers winning:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file (with `${VAR_NAME}` substitution)
//! 3. Environment variables
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use log_exporter::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Environment only, the usual setup for a scheduled function
//! let config = load_config(None)?;
//!
//! println!("Destination: {:?}", config.export.destination_bucket);
//! println!("Interval: {}h", config.export.interval_hours);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Setting |
//! |---|---|
//! | `S3_BUCKET` | `export.destination_bucket` |
//! | `SSM_LOG_GROUP_PARAM` | `export.prefixes_parameter` |
//! | `AWS_ACCOUNT` | `export.account_id` |
//! | `LOG_EXPORTER_LOG_LEVEL` | `application.log_level` |
//! | `LOG_EXPORTER_DRY_RUN` | `export.dry_run` |
//! | `LOG_EXPORTER_INTERVAL_HOURS` | `export.interval_hours` |
//! | `LOG_EXPORTER_PAGE_SIZE` | `export.page_size` |
//! | `LOG_EXPORTER_WATERMARK_PREFIX` | `export.watermark_prefix` |
//! | `LOG_EXPORTER_RETRY_MAX_ATTEMPTS` | `export.retry.max_attempts` |
//! | `LOG_EXPORTER_RETRY_DELAY_SECS` | `export.retry.delay_secs` |
//! | `LOG_EXPORTER_AWS_REGION` | `aws.region` |
//! | `LOG_EXPORTER_LOGGING_FORMAT` | `logging.format` |
//! | `LOG_EXPORTER_LOGGING_LOCAL_ENABLED` | `logging.local_enabled` |
//! | `LOG_EXPORTER_LOGGING_LOCAL_PATH` | `logging.local_path` |
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! destination_bucket = "${S3_BUCKET}"
//! prefixes_parameter = "/log-exporter/prefixes"
//! account_id = "123456789012"
//! interval_hours = 24
//!
//! [export.retry]
//! max_attempts = 10
//! delay_secs = 5
//!
//! [logging]
//! format = "json"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, AwsConfig, ExportConfig, ExporterConfig, LoggingConfig, RetryConfig,
};
