//! Scheduled-invocation entry point
//!
//! The job is triggered by a schedule, not by a request. The event and
//! context payloads are accepted for signature compatibility and ignored;
//! all configuration comes from the environment.

use crate::adapters::factory::create_aws_services;
use crate::config::{load_config, ExporterConfig};
use crate::core::export::{ExportCoordinator, ExportSummary};
use crate::domain::Result;

/// Run one export pass configured from the environment
///
/// Per-log-group failures are logged and never surface here. An error is
/// returned only when the run cannot proceed at all.
///
/// # Example
///
/// ```rust,no_run
/// use log_exporter::handler::lambda_handler;
///
/// # async fn example() -> log_exporter::domain::Result<()> {
/// lambda_handler(serde_json::Value::Null, serde_json::Value::Null).await?;
/// # Ok(())
/// # }
/// ```
pub async fn lambda_handler(_event: serde_json::Value, _context: serde_json::Value) -> Result<()> {
    let config = load_config(None)?;
    run_with_config(config).await?;
    Ok(())
}

/// Run one export pass with an already-loaded configuration
pub async fn run_with_config(config: ExporterConfig) -> Result<ExportSummary> {
    run_with_prefixes(config, None).await
}

/// Run one export pass, optionally replacing the stored prefix list
pub async fn run_with_prefixes(
    config: ExporterConfig,
    prefixes: Option<Vec<String>>,
) -> Result<ExportSummary> {
    let services = create_aws_services(&config.aws).await;

    let mut coordinator = ExportCoordinator::new(config.export, services);
    if let Some(prefixes) = prefixes {
        coordinator = coordinator.with_prefixes(prefixes);
    }

    coordinator.execute_export().await
}
