//! Export orchestration
//!
//! This module provides the core export logic:
//! - Export coordination (prefix loading, enumeration, eligibility, retry)
//! - Summary and reporting

pub mod coordinator;
pub mod summary;

pub use coordinator::{destination_prefix, ExportCoordinator};
pub use summary::{ExportError, ExportErrorType, ExportSummary, ExportedTask, GroupOutcome};
