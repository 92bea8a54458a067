//! CloudWatch Logs adapter

use super::traits::{LogGroupQuery, LogService};
use crate::domain::{ExportTaskRequest, LogGroup, LogGroupName, LogGroupPage, LogServiceError};
use async_trait::async_trait;
use aws_sdk_cloudwatchlogs::error::DisplayErrorContext;
use aws_sdk_cloudwatchlogs::Client;

/// [`LogService`] backed by Amazon CloudWatch Logs
#[derive(Debug, Clone)]
pub struct CloudWatchLogService {
    client: Client,
}

impl CloudWatchLogService {
    /// Wrap an existing CloudWatch Logs client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from a loaded SDK configuration
    pub fn from_sdk_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}

#[async_trait]
impl LogService for CloudWatchLogService {
    async fn describe_log_groups(
        &self,
        query: &LogGroupQuery,
    ) -> Result<LogGroupPage, LogServiceError> {
        let output = self
            .client
            .describe_log_groups()
            .log_group_name_prefix(&query.prefix)
            .limit(query.limit)
            .include_linked_accounts(query.include_linked_accounts)
            .set_next_token(query.next_token.clone())
            .send()
            .await
            .map_err(|err| {
                let service_error = err.into_service_error();
                if service_error.is_invalid_parameter_exception() {
                    LogServiceError::InvalidParameter(
                        DisplayErrorContext(&service_error).to_string(),
                    )
                } else {
                    LogServiceError::RequestFailed(format!(
                        "describe_log_groups {}: {}",
                        query.prefix,
                        DisplayErrorContext(&service_error)
                    ))
                }
            })?;

        let mut log_groups = Vec::with_capacity(output.log_groups().len());
        for group in output.log_groups() {
            let Some(name) = group.log_group_name() else {
                tracing::warn!(arn = ?group.arn(), "Log group without a name, skipping");
                continue;
            };
            let name = LogGroupName::new(name).map_err(LogServiceError::InvalidParameter)?;

            let mut log_group = LogGroup::new(name);
            if let Some(arn) = group.arn() {
                log_group = log_group.with_arn(arn);
            }
            if let Some(stored_bytes) = group.stored_bytes() {
                log_group = log_group.with_stored_bytes(stored_bytes);
            }
            log_groups.push(log_group);
        }

        Ok(LogGroupPage {
            log_groups,
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn create_export_task(
        &self,
        request: &ExportTaskRequest,
    ) -> Result<String, LogServiceError> {
        let output = self
            .client
            .create_export_task()
            .log_group_name(request.log_group.as_str())
            .from(request.window.from_ms)
            .to(request.window.to_ms)
            .destination(&request.destination)
            .destination_prefix(&request.destination_prefix)
            .send()
            .await
            .map_err(|err| {
                let service_error = err.into_service_error();
                let message = DisplayErrorContext(&service_error).to_string();
                if service_error.is_limit_exceeded_exception() {
                    LogServiceError::LimitExceeded(message)
                } else if service_error.is_resource_not_found_exception() {
                    LogServiceError::ResourceNotFound(message)
                } else if service_error.is_invalid_parameter_exception() {
                    LogServiceError::InvalidParameter(message)
                } else {
                    LogServiceError::RequestFailed(message)
                }
            })?;

        output.task_id().map(str::to_string).ok_or_else(|| {
            LogServiceError::RequestFailed(format!(
                "create_export_task for {} returned no task id",
                request.log_group
            ))
        })
    }
}
