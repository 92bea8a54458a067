//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting the outcome of
//! one export run.

use crate::domain::{ExportWindow, LogGroupName};
use std::time::Duration;

/// What happened to one log group during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupOutcome {
    /// Exported less than one interval ago
    Skipped {
        /// Milliseconds since the last export
        age_ms: i64,
    },
    /// Export task created and watermark advanced
    Exported {
        /// Task id returned by the log service
        task_id: String,
        /// Exported time range
        window: ExportWindow,
    },
    /// Dry run: an export would have been requested
    WouldExport {
        /// Time range that would be exported
        window: ExportWindow,
    },
    /// Every attempt hit the export-task rate limit
    RateLimited {
        /// Number of export calls made
        attempts: u32,
    },
    /// A non-retryable error; watermark left as it was
    Failed {
        /// Error message
        message: String,
    },
}

/// A created export task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedTask {
    /// Log group exported
    pub log_group: LogGroupName,

    /// Task id returned by the log service
    pub task_id: String,

    /// Exported time range
    pub window: ExportWindow,
}

/// Summary of an export run
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Number of prefixes enumerated
    pub prefixes_processed: usize,

    /// Number of log groups evaluated (a group matched by two prefixes counts twice)
    pub total_log_groups: usize,

    /// Log groups with a new export task
    pub exported: usize,

    /// Log groups skipped because they were exported recently
    pub skipped: usize,

    /// Log groups abandoned after exhausting the rate-limit retry budget
    pub rate_limited: usize,

    /// Log groups that failed with a non-retryable error
    pub failed: usize,

    /// Log groups that would have been exported (dry run)
    pub would_export: usize,

    /// Total number of export task creation calls
    pub export_calls: u32,

    /// Created export tasks
    pub tasks: Vec<ExportedTask>,

    /// Errors encountered during export
    pub errors: Vec<ExportError>,

    /// Duration of the run
    pub duration: Duration,

    /// Whether the run stopped before enumerating log groups
    pub aborted: bool,

    /// Why the run stopped early
    pub abort_reason: Option<String>,

    /// Whether the run was a dry run
    pub dry_run: bool,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Mark the run as stopped early
    pub fn abort(&mut self, reason: impl Into<String>) {
        self.aborted = true;
        self.abort_reason = Some(reason.into());
    }

    /// Add an error
    pub fn add_error(&mut self, error: ExportError) {
        self.errors.push(error);
    }

    /// Record the outcome for one log group
    pub fn record(&mut self, log_group: &LogGroupName, outcome: GroupOutcome) {
        match outcome {
            GroupOutcome::Skipped { .. } => self.skipped += 1,
            GroupOutcome::Exported { task_id, window } => {
                self.exported += 1;
                self.tasks.push(ExportedTask {
                    log_group: log_group.clone(),
                    task_id,
                    window,
                });
            }
            GroupOutcome::WouldExport { .. } => self.would_export += 1,
            GroupOutcome::RateLimited { attempts } => {
                self.rate_limited += 1;
                self.add_error(
                    ExportError::new(
                        ExportErrorType::RateLimit,
                        format!("Export task limit still exceeded after {attempts} attempts"),
                    )
                    .with_context(format!("log_group={log_group}")),
                );
            }
            GroupOutcome::Failed { message } => {
                self.failed += 1;
                self.add_error(
                    ExportError::new(ExportErrorType::Export, message)
                        .with_context(format!("log_group={log_group}")),
                );
            }
        }
    }

    /// Check if every evaluated log group was exported or skipped
    pub fn is_successful(&self) -> bool {
        !self.aborted && self.failed == 0 && self.rate_limited == 0 && self.errors.is_empty()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            prefixes = self.prefixes_processed,
            log_groups = self.total_log_groups,
            exported = self.exported,
            skipped = self.skipped,
            rate_limited = self.rate_limited,
            failed = self.failed,
            would_export = self.would_export,
            export_calls = self.export_calls,
            dry_run = self.dry_run,
            aborted = self.aborted,
            duration_ms = self.duration.as_millis() as u64,
            "Export run completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "Export run completed with errors"
            );
            for error in &self.errors {
                tracing::warn!(
                    error_type = ?error.error_type,
                    message = %error.message,
                    context = ?error.context,
                    "Export error"
                );
            }
        }
    }
}

/// Type of export error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportErrorType {
    /// Missing or invalid configuration
    Configuration,
    /// Export task creation failed
    Export,
    /// Export task creation was rate limited until the budget ran out
    RateLimit,
}

/// Export error with context
#[derive(Debug, Clone)]
pub struct ExportError {
    /// Type of error
    pub error_type: ExportErrorType,

    /// Error message
    pub message: String,

    /// Optional context (e.g., log group)
    pub context: Option<String>,
}

impl ExportError {
    /// Create a new export error
    pub fn new(error_type: ExportErrorType, message: String) -> Self {
        Self {
            error_type,
            message,
            context: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }
}
