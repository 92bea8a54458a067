//! Domain models and types for the exporter.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed names** ([`LogGroupName`], [`ParameterName`])
//! - **Domain models** ([`LogGroup`], [`LogGroupPage`], [`ExportWindow`], [`ExportTaskRequest`])
//! - **Error types** ([`ExporterError`], [`ParameterStoreError`], [`LogServiceError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ExporterError>`]:
//!
//! ```rust
//! use log_exporter::domain::{ExporterError, LogGroupName, Result};
//!
//! fn parse(name: &str) -> Result<LogGroupName> {
//!     LogGroupName::new(name).map_err(ExporterError::Configuration)
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod log_group;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ExporterError, LogServiceError, ParameterStoreError};
pub use ids::{LogGroupName, ParameterName};
pub use log_group::{ExportTaskRequest, ExportWindow, LogGroup, LogGroupPage};
pub use result::Result;
