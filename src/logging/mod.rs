//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - Text or JSON console output
//! - Configurable log levels (`RUST_LOG` wins when set)
//! - Optional local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use log_exporter::logging::init_logging;
//! use log_exporter::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(log_group = "/app/service", "Exporting log group");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use log_exporter::log_error_with_context;
/// use log_exporter::domain::ExporterError;
///
/// let error = ExporterError::Configuration("S3_BUCKET not defined".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log a retry attempt
///
/// # Example
///
/// ```no_run
/// use log_exporter::log_retry_attempt;
///
/// log_retry_attempt!(2, 10, "Export task limit exceeded");
/// ```
#[macro_export]
macro_rules! log_retry_attempt {
    ($attempt:expr, $max_attempts:expr, $reason:expr) => {
        tracing::warn!(
            attempt = $attempt,
            max_attempts = $max_attempts,
            reason = $reason,
            "Retrying operation"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::ExporterError;

    #[test]
    fn test_macros_expand_without_subscriber() {
        let error = ExporterError::Configuration("S3_BUCKET not defined".to_string());
        crate::log_error_with_context!(&error, "export failed");
        crate::log_retry_attempt!(1u32, 10u32, "limit exceeded");
    }
}
