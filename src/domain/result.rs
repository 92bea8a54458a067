//! Result type alias for the exporter

use super::errors::ExporterError;

/// Result type alias for exporter operations
///
/// # Examples
///
/// ```
/// use log_exporter::domain::result::Result;
/// use log_exporter::domain::errors::ExporterError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ExporterError::Configuration("S3_BUCKET not defined".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExporterError>;
