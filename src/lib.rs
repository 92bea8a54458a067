// Log Exporter - CloudWatch Logs to S3 export job
// Copyright (c) 2025 Log Exporter Contributors
// Licensed under the MIT License

//! # Log Exporter - CloudWatch Logs to S3
//!
//! A scheduled job that copies CloudWatch log groups to an S3 bucket,
//! at most once per interval per log group.
//!
//! ## Overview
//!
//! Each run:
//! - **Reads** a JSON array of log group prefixes from SSM Parameter Store
//! - **Enumerates** every log group matching each prefix, following pagination
//! - **Gates** each log group on a per-group watermark stored in Parameter Store
//! - **Exports** the window `[watermark, now)` with a CloudWatch export task,
//!   retrying with a fixed delay while the export-task limit is hit
//! - **Advances** the watermark to `now` once the task has been created
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`handler`] - Scheduled-invocation entry point
//! - [`core`] - Business logic (export run, watermark state)
//! - [`adapters`] - External integrations (SSM, CloudWatch Logs, clock)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use log_exporter::config::load_config;
//! use log_exporter::handler::run_with_config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config(None)?;
//!     let summary = run_with_config(config).await?;
//!
//!     println!("Created {} export tasks", summary.exported);
//!     Ok(())
//! }
//! ```
//!
//! ## Testing Against Fakes
//!
//! The export run only sees the [`adapters::ParameterStore`],
//! [`adapters::LogService`] and [`adapters::Clock`] traits, bundled in
//! [`adapters::Services`]:
//!
//! ```rust,no_run
//! use log_exporter::adapters::Services;
//! use log_exporter::config::ExportConfig;
//! use log_exporter::core::export::ExportCoordinator;
//!
//! # async fn example(services: Services) -> log_exporter::domain::Result<()> {
//! let coordinator = ExportCoordinator::new(ExportConfig::default(), services);
//! let summary = coordinator.execute_export().await?;
//! assert!(summary.aborted);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], whose error type is
//! [`domain::ExporterError`]. Per-log-group failures never surface as errors;
//! they are recorded in the run's [`core::export::ExportSummary`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod handler;
pub mod logging;
