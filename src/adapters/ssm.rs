//! SSM Parameter Store adapter

use super::traits::ParameterStore;
use crate::domain::{ParameterName, ParameterStoreError};
use async_trait::async_trait;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::ParameterType;
use aws_sdk_ssm::Client;

/// [`ParameterStore`] backed by AWS Systems Manager Parameter Store
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    /// Wrap an existing SSM client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from a loaded SDK configuration
    pub fn from_sdk_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(
        &self,
        name: &ParameterName,
    ) -> Result<String, ParameterStoreError> {
        let output = self
            .client
            .get_parameter()
            .name(name.as_str())
            .send()
            .await
            .map_err(|err| {
                let service_error = err.into_service_error();
                if service_error.is_parameter_not_found() {
                    ParameterStoreError::NotFound(name.to_string())
                } else {
                    ParameterStoreError::RequestFailed(format!(
                        "get_parameter {name}: {}",
                        DisplayErrorContext(&service_error)
                    ))
                }
            })?;

        output
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(str::to_string)
            .ok_or_else(|| ParameterStoreError::InvalidValue {
                name: name.to_string(),
                message: "parameter has no value".to_string(),
            })
    }

    async fn put_parameter(
        &self,
        name: &ParameterName,
        value: &str,
    ) -> Result<(), ParameterStoreError> {
        self.client
            .put_parameter()
            .name(name.as_str())
            .value(value)
            .r#type(ParameterType::String)
            .overwrite(true)
            .send()
            .await
            .map_err(|err| {
                ParameterStoreError::RequestFailed(format!(
                    "put_parameter {name}: {}",
                    DisplayErrorContext(&err)
                ))
            })?;

        Ok(())
    }

    async fn get_parameters_by_path(
        &self,
        path: &str,
    ) -> Result<Vec<(ParameterName, String)>, ParameterStoreError> {
        let mut parameters = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let output = self
                .client
                .get_parameters_by_path()
                .path(path)
                .recursive(true)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|err| {
                    ParameterStoreError::RequestFailed(format!(
                        "get_parameters_by_path {path}: {}",
                        DisplayErrorContext(&err)
                    ))
                })?;

            for parameter in output.parameters() {
                let (Some(name), Some(value)) = (parameter.name(), parameter.value()) else {
                    continue;
                };
                match ParameterName::new(name) {
                    Ok(name) => parameters.push((name, value.to_string())),
                    Err(e) => tracing::warn!(error = %e, "Skipping unnamed parameter"),
                }
            }

            match output.next_token() {
                Some(token) => next_token = Some(token.to_string()),
                None => break,
            }
        }

        Ok(parameters)
    }
}
