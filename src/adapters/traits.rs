//! Collaborator traits
//!
//! The export job only talks to the outside world through these traits, so
//! the AWS-backed implementations can be swapped for in-memory doubles.

use crate::domain::{
    ExportTaskRequest, LogGroupPage, LogServiceError, ParameterName, ParameterStoreError,
};
use async_trait::async_trait;
use std::time::Duration;

/// Key/value parameter store (SSM Parameter Store)
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Read a single parameter value
    ///
    /// # Errors
    ///
    /// Returns [`ParameterStoreError::NotFound`] when the parameter does not
    /// exist, and other variants for every other failure.
    async fn get_parameter(&self, name: &ParameterName)
        -> Result<String, ParameterStoreError>;

    /// Write a string parameter, overwriting any existing value
    async fn put_parameter(
        &self,
        name: &ParameterName,
        value: &str,
    ) -> Result<(), ParameterStoreError>;

    /// List every parameter below `path`, recursively
    async fn get_parameters_by_path(
        &self,
        path: &str,
    ) -> Result<Vec<(ParameterName, String)>, ParameterStoreError>;
}

/// Parameters for one `describe_log_groups` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogGroupQuery {
    /// Log group name prefix to match
    pub prefix: String,

    /// Page size
    pub limit: i32,

    /// Include log groups shared from linked source accounts
    pub include_linked_accounts: bool,

    /// Continuation token from the previous page
    pub next_token: Option<String>,
}

/// Logging service (CloudWatch Logs)
#[async_trait]
pub trait LogService: Send + Sync {
    /// Fetch one page of log groups matching the query
    async fn describe_log_groups(
        &self,
        query: &LogGroupQuery,
    ) -> Result<LogGroupPage, LogServiceError>;

    /// Create an export task and return its task id
    ///
    /// # Errors
    ///
    /// Returns [`LogServiceError::LimitExceeded`] when the account already has
    /// the maximum number of active export tasks.
    async fn create_export_task(
        &self,
        request: &ExportTaskRequest,
    ) -> Result<String, LogServiceError>;
}

/// Source of time and delays
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;

    /// Suspend for `duration`
    async fn sleep(&self, duration: Duration);
}
