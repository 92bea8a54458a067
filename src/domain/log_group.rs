//! Log group descriptor and export window

use crate::domain::ids::LogGroupName;
use serde::{Deserialize, Serialize};

/// A log group returned by CloudWatch Logs
///
/// Only the name drives export decisions; the ARN and stored bytes are
/// logged when the group is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogGroup {
    /// Log group name
    pub name: LogGroupName,

    /// Log group ARN, if returned
    pub arn: Option<String>,

    /// Stored bytes reported by the service
    pub stored_bytes: Option<i64>,
}

impl LogGroup {
    /// Create a descriptor with just a name
    pub fn new(name: LogGroupName) -> Self {
        Self {
            name,
            arn: None,
            stored_bytes: None,
        }
    }

    /// Set the ARN
    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }

    /// Set the stored bytes
    pub fn with_stored_bytes(mut self, stored_bytes: i64) -> Self {
        self.stored_bytes = Some(stored_bytes);
        self
    }
}

/// One page of a log group listing
#[derive(Debug, Clone, Default)]
pub struct LogGroupPage {
    /// Log groups on this page
    pub log_groups: Vec<LogGroup>,

    /// Continuation token for the next page, absent on the last page
    pub next_token: Option<String>,
}

/// Half-open export window `[from_ms, to_ms)` in epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportWindow {
    /// Start of the window (the previous watermark)
    pub from_ms: i64,

    /// End of the window (the time the log group was evaluated)
    pub to_ms: i64,
}

impl ExportWindow {
    /// Create a window
    pub fn new(from_ms: i64, to_ms: i64) -> Self {
        Self { from_ms, to_ms }
    }

    /// Width of the window in milliseconds
    pub fn width_ms(&self) -> i64 {
        self.to_ms - self.from_ms
    }
}

/// Request to create one export task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTaskRequest {
    /// Log group to export
    pub log_group: LogGroupName,

    /// Time range to export
    pub window: ExportWindow,

    /// Destination bucket
    pub destination: String,

    /// Key prefix inside the bucket
    pub destination_prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_group_builder() {
        let group = LogGroup::new(LogGroupName::new("/app/service").unwrap())
            .with_arn("arn:aws:logs:eu-west-1:123456789:log-group:/app/service:*")
            .with_stored_bytes(2048);

        assert_eq!(group.name.as_str(), "/app/service");
        assert!(group.arn.is_some());
        assert_eq!(group.stored_bytes, Some(2048));
    }

    #[test]
    fn test_window_width() {
        let window = ExportWindow::new(1_000, 86_401_000);
        assert_eq!(window.width_ms(), 86_400_000);
    }
}
