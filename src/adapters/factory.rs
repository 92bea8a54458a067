//! AWS client factory
//!
//! Builds the AWS-backed collaborators from configuration. The SDK
//! configuration is loaded once and shared by both service clients.

use super::clock::SystemClock;
use super::cloudwatch::CloudWatchLogService;
use super::ssm::SsmParameterStore;
use super::traits::{Clock, LogService, ParameterStore};
use crate::config::schema::AwsConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use std::sync::Arc;

/// The collaborators an export run needs
#[derive(Clone)]
pub struct Services {
    /// Parameter Store client
    pub parameter_store: Arc<dyn ParameterStore + Send + Sync>,

    /// CloudWatch Logs client
    pub log_service: Arc<dyn LogService + Send + Sync>,

    /// Wall clock
    pub clock: Arc<dyn Clock + Send + Sync>,
}

/// Load the shared SDK configuration
///
/// Credentials and region come from the default provider chain; an explicit
/// region in the configuration takes precedence.
pub async fn load_sdk_config(config: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
        tracing::debug!(region = %region, "Using configured AWS region");
        loader = loader.region(Region::new(region.clone()));
    }
    loader.load().await
}

/// Create the Parameter Store client alone (used by `status`)
pub async fn create_parameter_store(
    config: &AwsConfig,
) -> Arc<dyn ParameterStore + Send + Sync> {
    let sdk_config = load_sdk_config(config).await;
    Arc::new(SsmParameterStore::from_sdk_config(&sdk_config))
}

/// Create every AWS-backed collaborator
pub async fn create_aws_services(config: &AwsConfig) -> Services {
    let sdk_config = load_sdk_config(config).await;
    tracing::info!(
        region = ?sdk_config.region().map(|r| r.as_ref().to_string()),
        "Creating AWS clients"
    );

    Services {
        parameter_store: Arc::new(SsmParameterStore::from_sdk_config(&sdk_config)),
        log_service: Arc::new(CloudWatchLogService::from_sdk_config(&sdk_config)),
        clock: Arc::new(SystemClock),
    }
}
