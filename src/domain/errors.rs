//! Domain error types
//!
//! This module defines the error hierarchy for the exporter.
//! Errors are domain-specific and don't expose AWS SDK types; adapters
//! classify SDK failures into these variants at the boundary.

use thiserror::Error;

/// Main exporter error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ExporterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Parameter Store errors
    #[error("Parameter store error: {0}")]
    ParameterStore(#[from] ParameterStoreError),

    /// CloudWatch Logs errors
    #[error("Log service error: {0}")]
    LogService(#[from] LogServiceError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Parameter Store errors
#[derive(Debug, Error)]
pub enum ParameterStoreError {
    /// The named parameter does not exist
    #[error("Parameter not found: {0}")]
    NotFound(String),

    /// The parameter exists but its value cannot be used
    #[error("Invalid value for parameter {name}: {message}")]
    InvalidValue { name: String, message: String },

    /// Any other failure talking to the store
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl ParameterStoreError {
    /// Whether this error means the parameter simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// CloudWatch Logs errors
#[derive(Debug, Error)]
pub enum LogServiceError {
    /// Too many concurrent export tasks; the request may be retried
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),

    /// Log group not found
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The service rejected a request parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Any other failure talking to the service
    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl LogServiceError {
    /// Whether the error is the export-task rate limit
    pub fn is_limit_exceeded(&self) -> bool {
        matches!(self, Self::LimitExceeded(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExporterError {
    fn from(err: std::io::Error) -> Self {
        ExporterError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ExporterError {
    fn from(err: serde_json::Error) -> Self {
        ExporterError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExporterError {
    fn from(err: toml::de::Error) -> Self {
        ExporterError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exporter_error_display() {
        let err = ExporterError::Configuration("S3_BUCKET not defined".to_string());
        assert_eq!(err.to_string(), "Configuration error: S3_BUCKET not defined");
    }

    #[test]
    fn test_parameter_store_error_conversion() {
        let err: ExporterError = ParameterStoreError::NotFound("/x".to_string()).into();
        assert!(matches!(err, ExporterError::ParameterStore(_)));
        assert_eq!(err.to_string(), "Parameter store error: Parameter not found: /x");
    }

    #[test]
    fn test_log_service_error_conversion() {
        let err: ExporterError = LogServiceError::LimitExceeded("busy".to_string()).into();
        assert!(matches!(err, ExporterError::LogService(_)));
    }

    #[test]
    fn test_error_classification() {
        assert!(ParameterStoreError::NotFound("/a".to_string()).is_not_found());
        assert!(!ParameterStoreError::RequestFailed("denied".to_string()).is_not_found());

        assert!(LogServiceError::LimitExceeded("busy".to_string()).is_limit_exceeded());
        assert!(!LogServiceError::InvalidParameter("bad".to_string()).is_limit_exceeded());
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err: ExporterError = json_err.into();
        assert!(matches!(err, ExporterError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ExporterError = toml_err.into();
        assert!(matches!(err, ExporterError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ExporterError = io_err.into();
        assert!(matches!(err, ExporterError::Io(_)));
    }
}
