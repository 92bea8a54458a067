//! Status command implementation
//!
//! This module implements the `status` command for displaying stored
//! watermarks and whether each log group is due for export.

use crate::adapters::factory::create_parameter_store;
use crate::config::load_config;
use crate::core::state::{StateManager, Watermark};
use chrono::Utc;
use clap::Args;
use std::path::Path;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Only show log groups starting with this prefix
    #[arg(long)]
    pub log_group: Option<String>,
}

impl StatusArgs {
    /// Keep the watermarks matching the log group filter
    pub fn filter<'a>(&self, watermarks: &'a [Watermark]) -> Vec<&'a Watermark> {
        watermarks
            .iter()
            .filter(|w| match &self.log_group {
                Some(prefix) => w.log_group.as_str().starts_with(prefix.as_str()),
                None => true,
            })
            .collect()
    }

    /// Execute the status command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        tracing::info!("Checking export status");

        println!("📊 Export Status");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {}", e);
                return Ok(2);
            }
        };

        let parameter_store = create_parameter_store(&config.aws).await;
        let state_manager = StateManager::new(parameter_store, config.export.watermark_prefix.clone());

        let watermarks = match state_manager.get_all_watermarks().await {
            Ok(w) => w,
            Err(e) => {
                println!("❌ Failed to load watermarks");
                println!("   Error: {}", e);
                return Ok(4);
            }
        };

        if watermarks.is_empty() {
            println!("No export history found under {}.", state_manager.prefix());
            println!("Run 'log-exporter export' to start exporting logs.");
            return Ok(0);
        }

        let filtered = self.filter(&watermarks);
        if filtered.is_empty() {
            println!("No watermarks match the specified filter.");
            return Ok(0);
        }

        let now = Utc::now().timestamp_millis();
        let interval_ms = config.export.interval_ms();

        println!("Found {} watermark(s):", filtered.len());
        println!();
        println!(
            "{:<60} {:<22} {:<10} {:<5}",
            "Log Group", "Last Export (UTC)", "Age", "Due"
        );
        println!("{}", "-".repeat(100));

        for watermark in filtered {
            let last_export = watermark
                .last_export_at()
                .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "Never".to_string());
            let due = if watermark.is_due(now, interval_ms) {
                "yes"
            } else {
                "no"
            };

            let age = match watermark.last_export_at() {
                Some(_) => format_age(watermark.age_ms(now)),
                None => "-".to_string(),
            };

            println!(
                "{:<60} {:<22} {:<10} {:<5}",
                watermark.log_group.as_str(),
                last_export,
                age,
                due
            );
        }

        println!();
        Ok(0)
    }
}

/// Render an age in milliseconds as hours and minutes
fn format_age(age_ms: i64) -> String {
    let minutes = age_ms.max(0) / 60_000;
    format!("{}h{:02}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LogGroupName;

    fn watermark(name: &str) -> Watermark {
        Watermark::stored(
            "/log-exporter-last-export",
            LogGroupName::new(name).unwrap(),
            1_700_000_000_000,
        )
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(0), "0h00m");
        assert_eq!(format_age(90 * 60_000), "1h30m");
        assert_eq!(format_age(25 * 3_600_000 + 5 * 60_000), "25h05m");
        assert_eq!(format_age(-5), "0h00m");
    }

    #[test]
    fn test_status_filter() {
        let watermarks = vec![watermark("/app/api"), watermark("/aws/lambda/job")];

        let all = StatusArgs { log_group: None };
        assert_eq!(all.filter(&watermarks).len(), 2);

        let app = StatusArgs {
            log_group: Some("/app".to_string()),
        };
        let filtered = app.filter(&watermarks);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].log_group.as_str(), "/app/api");
    }
}
