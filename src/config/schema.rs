//! Configuration schema types
//!
//! Every section has defaults, so an empty file (or no file at all) plus
//! the three required environment variables is a complete configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Milliseconds in one hour
const HOUR_MS: i64 = 60 * 60 * 1000;

/// Main exporter configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// AWS client settings
    #[serde(default)]
    pub aws: AwsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExporterConfig {
    /// Validates the configuration
    ///
    /// The destination bucket, prefix parameter and account id are not
    /// checked here: the export run reports them when they are missing.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Names of required settings that are not set
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.export.destination_bucket) {
            missing.push("S3_BUCKET");
        }
        if is_blank(&self.export.prefixes_parameter) {
            missing.push("SSM_LOG_GROUP_PARAM");
        }
        if is_blank(&self.export.account_id) {
            missing.push("AWS_ACCOUNT");
        }
        missing
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or_default().is_empty()
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Destination S3 bucket (`S3_BUCKET`)
    #[serde(default)]
    pub destination_bucket: Option<String>,

    /// Parameter holding the JSON list of log group prefixes (`SSM_LOG_GROUP_PARAM`)
    #[serde(default)]
    pub prefixes_parameter: Option<String>,

    /// Account id prepended to every destination prefix (`AWS_ACCOUNT`)
    #[serde(default)]
    pub account_id: Option<String>,

    /// Parameter path under which watermarks are stored
    #[serde(default = "default_watermark_prefix")]
    pub watermark_prefix: String,

    /// Minimum hours between two exports of the same log group
    #[serde(default = "default_interval_hours")]
    pub interval_hours: u64,

    /// Page size for log group listing (CloudWatch allows 1-50)
    #[serde(default = "default_page_size")]
    pub page_size: i32,

    /// Include log groups from linked source accounts
    #[serde(default = "default_true")]
    pub include_linked_accounts: bool,

    /// Evaluate eligibility only; create no export tasks and write no watermarks
    #[serde(default)]
    pub dry_run: bool,

    /// Rate-limit retry settings
    #[serde(default)]
    pub retry: RetryConfig,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.watermark_prefix.starts_with('/') {
            return Err(format!(
                "export.watermark_prefix must start with '/', got '{}'",
                self.watermark_prefix
            ));
        }

        if self.interval_hours == 0 || self.interval_hours > 24 * 366 {
            return Err(format!(
                "export.interval_hours must be between 1 and {}, got {}",
                24 * 366,
                self.interval_hours
            ));
        }

        if !(1..=50).contains(&self.page_size) {
            return Err(format!(
                "export.page_size must be between 1 and 50, got {}",
                self.page_size
            ));
        }

        self.retry.validate()?;
        Ok(())
    }

    /// The export interval in milliseconds
    pub fn interval_ms(&self) -> i64 {
        self.interval_hours as i64 * HOUR_MS
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            destination_bucket: None,
            prefixes_parameter: None,
            account_id: None,
            watermark_prefix: default_watermark_prefix(),
            interval_hours: default_interval_hours(),
            page_size: default_page_size(),
            include_linked_accounts: true,
            dry_run: false,
            retry: RetryConfig::default(),
        }
    }
}

/// Retry configuration for rate-limited export task creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of export attempts per log group
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed delay between attempts in seconds
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
}

impl RetryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 || self.max_attempts > 100 {
            return Err(format!(
                "export.retry.max_attempts must be between 1 and 100, got {}",
                self.max_attempts
            ));
        }

        if self.delay_secs > 300 {
            return Err(format!(
                "export.retry.delay_secs must be <= 300, got {}",
                self.delay_secs
            ));
        }

        Ok(())
    }

    /// The delay between attempts
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_secs: default_delay_secs(),
        }
    }
}

/// AWS client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Region override; the default provider chain is used when unset
    #[serde(default)]
    pub region: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Console format (text or json)
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.format.as_str()) {
            return Err(format!(
                "Invalid logging.format '{}'. Must be one of: {}",
                self.format,
                valid_formats.join(", ")
            ));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_watermark_prefix() -> String {
    "/log-exporter-last-export".to_string()
}

fn default_interval_hours() -> u64 {
    24
}

fn default_page_size() -> i32 {
    50
}

fn default_max_attempts() -> u32 {
    10
}

fn default_delay_secs() -> u64 {
    5
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_local_path() -> String {
    "/var/log/log-exporter".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExporterConfig::default();

        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.export.watermark_prefix, "/log-exporter-last-export");
        assert_eq!(config.export.interval_hours, 24);
        assert_eq!(config.export.interval_ms(), 86_400_000);
        assert_eq!(config.export.page_size, 50);
        assert!(config.export.include_linked_accounts);
        assert!(!config.export.dry_run);
        assert_eq!(config.export.retry.max_attempts, 10);
        assert_eq!(config.export.retry.delay(), Duration::from_secs(5));
        assert!(config.aws.region.is_none());
        assert_eq!(config.logging.format, "text");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ExporterConfig = toml::from_str("").unwrap();
        assert_eq!(config.export.page_size, 50);
        assert_eq!(config.export.retry.max_attempts, 10);
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_export_config_validation() {
        let mut config = ExportConfig::default();
        assert!(config.validate().is_ok());

        config.page_size = 0;
        assert!(config.validate().is_err());
        config.page_size = 51;
        assert!(config.validate().is_err());
        config.page_size = 50;

        config.interval_hours = 0;
        assert!(config.validate().is_err());
        config.interval_hours = 24;

        config.watermark_prefix = "no-leading-slash".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_retry_config_validation() {
        let mut config = RetryConfig::default();
        assert!(config.validate().is_ok());

        config.max_attempts = 0;
        assert!(config.validate().is_err());

        config.max_attempts = 10;
        config.delay_secs = 0;
        assert!(config.validate().is_ok());

        config.delay_secs = 301;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.format = "xml".to_string();
        assert!(config.validate().is_err());

        config.format = "json".to_string();
        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_required() {
        let mut config = ExporterConfig::default();
        assert_eq!(
            config.missing_required(),
            vec!["S3_BUCKET", "SSM_LOG_GROUP_PARAM", "AWS_ACCOUNT"]
        );

        config.export.destination_bucket = Some("bucket".to_string());
        config.export.prefixes_parameter = Some("  ".to_string());
        config.export.account_id = Some("123456789".to_string());
        assert_eq!(config.missing_required(), vec!["SSM_LOG_GROUP_PARAM"]);
    }
}
