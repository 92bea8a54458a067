//! External system integrations.
//!
//! - [`ssm`] - SSM Parameter Store (prefix list and watermarks)
//! - [`cloudwatch`] - CloudWatch Logs (log group listing and export tasks)
//! - [`clock`] - System time and delays
//! - [`factory`] - Builds the AWS-backed collaborators from configuration
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies.
//! The export job depends only on the traits in [`traits`], so tests can
//! run it against in-memory implementations:
//!
//! ```rust,no_run
//! use log_exporter::adapters::factory::create_aws_services;
//! use log_exporter::adapters::Clock;
//! use log_exporter::config::schema::AwsConfig;
//!
//! # async fn example() {
//! let services = create_aws_services(&AwsConfig::default()).await;
//! let now = services.clock.now_millis();
//! # }
//! ```

pub mod clock;
pub mod cloudwatch;
pub mod factory;
pub mod ssm;
pub mod traits;

pub use clock::SystemClock;
pub use cloudwatch::CloudWatchLogService;
pub use factory::{create_aws_services, create_parameter_store, Services};
pub use ssm::SsmParameterStore;
pub use traits::{Clock, LogGroupQuery, LogService, ParameterStore};
