//! Export coordinator - main orchestrator for an export run
//!
//! One run loads the prefix list, enumerates every matching log group, and
//! for each one that is due creates an export task covering the time since
//! its watermark, then advances the watermark.

use crate::adapters::factory::Services;
use crate::adapters::traits::{Clock, LogGroupQuery, LogService, ParameterStore};
use crate::config::ExportConfig;
use crate::core::export::summary::{ExportError, ExportErrorType, ExportSummary, GroupOutcome};
use crate::core::state::StateManager;
use crate::domain::{
    ExportTaskRequest, ExportWindow, ExporterError, LogGroup, LogGroupName, LogServiceError,
    ParameterName, ParameterStoreError, Result,
};
use crate::log_retry_attempt;
use std::sync::Arc;
use std::time::Instant;

/// Result of the export-with-retry loop for one log group
#[derive(Debug)]
enum ExportAttempt {
    Created(String),
    RateLimited { attempts: u32 },
    Failed(LogServiceError),
}

/// Build the S3 key prefix for a log group's export
///
/// Leading and trailing slashes are trimmed from the log group name so the
/// key never contains a doubled separator.
///
/// ```
/// use log_exporter::core::export::destination_prefix;
/// use log_exporter::domain::LogGroupName;
///
/// let log_group = LogGroupName::new("/app/service").unwrap();
/// assert_eq!(destination_prefix("123456789", &log_group), "123456789/app/service");
/// ```
pub fn destination_prefix(account_id: &str, log_group: &LogGroupName) -> String {
    format!("{account_id}/{}", log_group.trimmed())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Export coordinator
pub struct ExportCoordinator {
    config: ExportConfig,
    parameter_store: Arc<dyn ParameterStore + Send + Sync>,
    log_service: Arc<dyn LogService + Send + Sync>,
    clock: Arc<dyn Clock + Send + Sync>,
    state_manager: StateManager,
    prefix_override: Option<Vec<String>>,
}

impl ExportCoordinator {
    /// Create a new export coordinator
    pub fn new(config: ExportConfig, services: Services) -> Self {
        let state_manager =
            StateManager::new(services.parameter_store.clone(), config.watermark_prefix.clone());

        Self {
            config,
            parameter_store: services.parameter_store,
            log_service: services.log_service,
            clock: services.clock,
            state_manager,
            prefix_override: None,
        }
    }

    /// Use these prefixes instead of reading the prefix parameter
    pub fn with_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.prefix_override = Some(prefixes);
        self
    }

    /// The state manager used for watermarks
    pub fn state_manager(&self) -> &StateManager {
        &self.state_manager
    }

    /// Execute one export run
    ///
    /// Per-log-group failures are recorded in the summary and never stop the
    /// run. A missing destination bucket stops the run early with an aborted
    /// summary.
    ///
    /// # Errors
    ///
    /// Returns an error when the prefix list cannot be loaded, a listing call
    /// fails, or a watermark cannot be read for any reason other than not
    /// existing.
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();
        summary.dry_run = self.config.dry_run;

        let Some(destination) = non_blank(&self.config.destination_bucket) else {
            tracing::error!("S3_BUCKET not defined, nothing will be exported");
            summary.abort("S3_BUCKET not defined");
            summary.add_error(ExportError::new(
                ExportErrorType::Configuration,
                "S3_BUCKET not defined".to_string(),
            ));
            summary = summary.with_duration(start_time.elapsed());
            summary.log_summary();
            return Ok(summary);
        };

        tracing::info!(
            destination = %destination,
            prefixes_parameter = ?self.config.prefixes_parameter,
            dry_run = self.config.dry_run,
            "Starting export run"
        );

        let prefixes = match &self.prefix_override {
            Some(prefixes) => {
                tracing::info!(prefixes = ?prefixes, "Using prefixes from command line");
                prefixes.clone()
            }
            None => self.load_prefixes().await?,
        };
        summary.prefixes_processed = prefixes.len();

        let log_groups = self.enumerate_log_groups(prefixes).await?;
        summary.total_log_groups = log_groups.len();

        tracing::info!(count = log_groups.len(), "Log groups to evaluate");

        for log_group in &log_groups {
            let outcome = self
                .process_log_group(log_group, destination, &mut summary.export_calls)
                .await?;
            summary.record(&log_group.name, outcome);
        }

        summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(summary)
    }

    /// Read the JSON array of log group prefixes from the parameter store
    async fn load_prefixes(&self) -> Result<Vec<String>> {
        let name = non_blank(&self.config.prefixes_parameter).ok_or_else(|| {
            ExporterError::Configuration("SSM_LOG_GROUP_PARAM not defined".to_string())
        })?;
        let name = ParameterName::new(name).map_err(ExporterError::Configuration)?;

        let raw = self.parameter_store.get_parameter(&name).await?;
        let prefixes: Vec<String> =
            serde_json::from_str(&raw).map_err(|e| ParameterStoreError::InvalidValue {
                name: name.to_string(),
                message: format!("expected a JSON array of strings: {e}"),
            })?;

        tracing::info!(parameter = %name, count = prefixes.len(), "Loaded log group prefixes");
        Ok(prefixes)
    }

    /// List every log group matching any prefix, following pagination
    ///
    /// Prefixes are consumed from the back of the list. Log groups matched by
    /// more than one prefix appear once per match.
    async fn enumerate_log_groups(&self, mut prefixes: Vec<String>) -> Result<Vec<LogGroup>> {
        let mut log_groups = Vec::new();

        while let Some(prefix) = prefixes.pop() {
            tracing::info!(prefix = %prefix, "Listing log groups");

            let mut next_token: Option<String> = None;
            let mut pages = 0usize;
            loop {
                let query = LogGroupQuery {
                    prefix: prefix.clone(),
                    limit: self.config.page_size,
                    include_linked_accounts: self.config.include_linked_accounts,
                    next_token: next_token.take(),
                };

                let page = self.log_service.describe_log_groups(&query).await?;
                pages += 1;
                log_groups.extend(page.log_groups);

                match page.next_token.filter(|token| !token.is_empty()) {
                    Some(token) => next_token = Some(token),
                    None => break,
                }
            }

            tracing::debug!(prefix = %prefix, pages, "Finished listing prefix");
        }

        Ok(log_groups)
    }

    /// Evaluate one log group and export it if it is due
    async fn process_log_group(
        &self,
        log_group: &LogGroup,
        destination: &str,
        export_calls: &mut u32,
    ) -> Result<GroupOutcome> {
        let name = &log_group.name;
        let mut watermark = self.state_manager.load_watermark(name).await?;
        let now = self.clock.now_millis();

        tracing::info!(
            log_group = %name,
            parameter = %watermark.parameter_name,
            last_export_ms = watermark.last_export_ms,
            arn = ?log_group.arn,
            stored_bytes = ?log_group.stored_bytes,
            "Evaluating log group"
        );

        if !watermark.is_due(now, self.config.interval_ms()) {
            let age_ms = watermark.age_ms(now);
            tracing::info!(
                log_group = %name,
                age_ms,
                interval_hours = self.config.interval_hours,
                "Skipped until the export interval has passed"
            );
            return Ok(GroupOutcome::Skipped { age_ms });
        }

        let window = ExportWindow::new(watermark.last_export_ms, now);

        if self.config.dry_run {
            tracing::info!(
                log_group = %name,
                from_ms = window.from_ms,
                to_ms = window.to_ms,
                "Dry run: would create export task"
            );
            return Ok(GroupOutcome::WouldExport { window });
        }

        let Some(account_id) = non_blank(&self.config.account_id) else {
            tracing::error!(log_group = %name, "Error exporting: AWS_ACCOUNT not defined");
            return Ok(GroupOutcome::Failed {
                message: "AWS_ACCOUNT not defined".to_string(),
            });
        };

        let request = ExportTaskRequest {
            log_group: name.clone(),
            window,
            destination: destination.to_string(),
            destination_prefix: destination_prefix(account_id, name),
        };

        tracing::info!(
            log_group = %name,
            destination = %request.destination,
            destination_prefix = %request.destination_prefix,
            from_ms = window.from_ms,
            to_ms = window.to_ms,
            "Exporting log group"
        );

        match self.export_with_retry(&request, export_calls).await {
            ExportAttempt::Created(task_id) => {
                tracing::info!(log_group = %name, task_id = %task_id, "Export task created");

                watermark.advance_to(window.to_ms);
                if let Err(e) = self.state_manager.save_watermark(&watermark).await {
                    tracing::error!(
                        log_group = %name,
                        task_id = %task_id,
                        error = %e,
                        "Export task created but watermark could not be saved"
                    );
                    return Ok(GroupOutcome::Failed {
                        message: format!(
                            "Export task {task_id} created but watermark write failed: {e}"
                        ),
                    });
                }

                Ok(GroupOutcome::Exported { task_id, window })
            }
            ExportAttempt::RateLimited { attempts } => {
                tracing::warn!(
                    log_group = %name,
                    attempts,
                    "Export task limit still exceeded, leaving log group for the next run"
                );
                Ok(GroupOutcome::RateLimited { attempts })
            }
            ExportAttempt::Failed(e) => {
                tracing::error!(log_group = %name, error = %e, "Error exporting log group");
                Ok(GroupOutcome::Failed {
                    message: e.to_string(),
                })
            }
        }
    }

    /// Create the export task, retrying with a fixed delay while rate limited
    ///
    /// Makes at most `retry.max_attempts` calls. No delay follows the final
    /// attempt.
    async fn export_with_retry(
        &self,
        request: &ExportTaskRequest,
        export_calls: &mut u32,
    ) -> ExportAttempt {
        let max_attempts = self.config.retry.max_attempts.max(1);
        let delay = self.config.retry.delay();
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            *export_calls += 1;

            match self.log_service.create_export_task(request).await {
                Ok(task_id) => return ExportAttempt::Created(task_id),
                Err(e) if e.is_limit_exceeded() => {
                    if attempt >= max_attempts {
                        return ExportAttempt::RateLimited { attempts: attempt };
                    }
                    log_retry_attempt!(
                        attempt,
                        max_attempts,
                        "Export task limit exceeded, waiting for running tasks to finish"
                    );
                    self.clock.sleep(delay).await;
                }
                Err(e) => return ExportAttempt::Failed(e),
            }
        }
    }
}
