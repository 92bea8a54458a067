//! State manager for watermark persistence
//!
//! This module provides the StateManager for loading and saving watermarks
//! through the parameter store.

use crate::adapters::traits::ParameterStore;
use crate::core::state::watermark::Watermark;
use crate::domain::ids::LogGroupName;
use crate::domain::Result;
use std::sync::Arc;

/// State manager for watermark persistence
///
/// Watermarks live under a single parameter path, one parameter per log
/// group.
pub struct StateManager {
    /// Parameter store backend
    storage: Arc<dyn ParameterStore + Send + Sync>,

    /// Parameter path watermarks are stored under
    prefix: String,
}

impl StateManager {
    /// Create a new StateManager
    ///
    /// # Arguments
    ///
    /// * `storage` - Parameter store implementation
    /// * `prefix` - Parameter path for watermarks, e.g. `/log-exporter-last-export`
    pub fn new(storage: Arc<dyn ParameterStore + Send + Sync>, prefix: impl Into<String>) -> Self {
        Self {
            storage,
            prefix: prefix.into(),
        }
    }

    /// The parameter path watermarks are stored under
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Load the watermark for a log group
    ///
    /// A missing parameter means the log group was never exported and
    /// yields a watermark at epoch 0.
    ///
    /// # Errors
    ///
    /// Returns an error for any other read failure, or when the stored value
    /// is not an integer.
    pub async fn load_watermark(&self, log_group: &LogGroupName) -> Result<Watermark> {
        let parameter_name = Watermark::parameter_name_for(&self.prefix, log_group);

        match self.storage.get_parameter(&parameter_name).await {
            Ok(raw) => {
                let last_export_ms = Watermark::parse_value(&parameter_name, &raw)?;
                Ok(Watermark::stored(&self.prefix, log_group.clone(), last_export_ms))
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(
                    log_group = %log_group,
                    parameter = %parameter_name,
                    "No watermark found, treating as never exported"
                );
                Ok(Watermark::never_exported(&self.prefix, log_group.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Save a watermark, overwriting any existing value
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn save_watermark(&self, watermark: &Watermark) -> Result<()> {
        tracing::debug!(
            log_group = %watermark.log_group,
            parameter = %watermark.parameter_name,
            last_export_ms = watermark.last_export_ms,
            "Saving watermark"
        );

        self.storage
            .put_parameter(&watermark.parameter_name, &watermark.encode_value())
            .await?;
        Ok(())
    }

    /// Get every stored watermark
    ///
    /// The log group name is recovered from the parameter name by removing
    /// the prefix, so names that had doubled slashes collapsed come back in
    /// their collapsed form. Parameters with non-integer values are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing fails.
    pub async fn get_all_watermarks(&self) -> Result<Vec<Watermark>> {
        let parameters = self.storage.get_parameters_by_path(&self.prefix).await?;
        let mut watermarks = Vec::with_capacity(parameters.len());

        for (name, raw) in parameters {
            let Some(suffix) = name.as_str().strip_prefix(self.prefix.trim_end_matches('/')) else {
                continue;
            };
            let Ok(log_group) = LogGroupName::new(suffix) else {
                continue;
            };

            match Watermark::parse_value(&name, &raw) {
                Ok(last_export_ms) => watermarks.push(Watermark {
                    log_group,
                    parameter_name: name,
                    last_export_ms,
                    persisted: true,
                }),
                Err(e) => tracing::warn!(error = %e, "Skipping malformed watermark"),
            }
        }

        watermarks.sort_by(|a, b| a.log_group.as_str().cmp(b.log_group.as_str()));
        Ok(watermarks)
    }
}
