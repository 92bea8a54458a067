//! Core business logic.
//!
//! # Modules
//!
//! - [`export`] - Export orchestration and run summary
//! - [`state`] - Watermark persistence
//!
//! # Export Workflow
//!
//! 1. **Load prefixes**: Read the JSON prefix list from Parameter Store
//! 2. **Enumerate**: List log groups per prefix, following pagination
//! 3. **Load state**: Read each log group's watermark (missing = epoch 0)
//! 4. **Gate**: Skip log groups exported less than one interval ago
//! 5. **Export**: Create an export task for `[watermark, now)`, retrying while rate limited
//! 6. **Checkpoint**: Write `now` as the new watermark after the task is created
//! 7. **Report**: Log the run summary
//!
//! # Example
//!
//! ```rust,no_run
//! use log_exporter::adapters::create_aws_services;
//! use log_exporter::config::load_config;
//! use log_exporter::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None)?;
//! let services = create_aws_services(&config.aws).await;
//!
//! let coordinator = ExportCoordinator::new(config.export, services);
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Exported: {}", summary.exported);
//! println!("Skipped: {}", summary.skipped);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod state;
