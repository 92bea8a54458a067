//! Integration tests for watermark persistence

mod common;

use common::InMemoryParameterStore;
use log_exporter::core::state::{StateManager, Watermark};
use log_exporter::domain::LogGroupName;
use std::sync::Arc;

const PREFIX: &str = "/log-exporter-last-export";

fn manager(store: &Arc<InMemoryParameterStore>) -> StateManager {
    StateManager::new(store.clone(), PREFIX)
}

#[tokio::test]
async fn test_load_missing_watermark_defaults_to_epoch() {
    let store = Arc::new(InMemoryParameterStore::new());
    let log_group = LogGroupName::new("/app/service").unwrap();

    let watermark = manager(&store).load_watermark(&log_group).await.unwrap();

    assert_eq!(watermark.last_export_ms, 0);
    assert!(!watermark.persisted);
    assert_eq!(
        watermark.parameter_name.as_str(),
        "/log-exporter-last-export/app/service"
    );
}

#[tokio::test]
async fn test_save_then_load() {
    let store = Arc::new(InMemoryParameterStore::new());
    let state_manager = manager(&store);
    let log_group = LogGroupName::new("/app/service").unwrap();

    let mut watermark = state_manager.load_watermark(&log_group).await.unwrap();
    watermark.advance_to(1_700_000_000_000);
    state_manager.save_watermark(&watermark).await.unwrap();

    assert_eq!(
        store.value("/log-exporter-last-export/app/service").as_deref(),
        Some("1700000000000")
    );

    let reloaded = state_manager.load_watermark(&log_group).await.unwrap();
    assert_eq!(reloaded.last_export_ms, 1_700_000_000_000);
    assert!(reloaded.persisted);
}

#[tokio::test]
async fn test_unprefixed_log_group_name() {
    let store = Arc::new(InMemoryParameterStore::new());
    let log_group = LogGroupName::new("app-without-slash").unwrap();

    let watermark = manager(&store).load_watermark(&log_group).await.unwrap();

    assert_eq!(
        watermark.parameter_name.as_str(),
        "/log-exporter-last-export/app-without-slash"
    );
}

#[tokio::test]
async fn test_get_all_watermarks() {
    let store = Arc::new(InMemoryParameterStore::new());
    store.insert("/log-exporter-last-export/app/web", "1700000000000");
    store.insert("/log-exporter-last-export/aws/lambda/job", "1600000000000");
    store.insert("/log-exporter-last-export/app/broken", "not-a-number");
    store.insert("/log-exporter/prefixes", "[\"/app/\"]");

    let watermarks = manager(&store).get_all_watermarks().await.unwrap();

    let names: Vec<&str> = watermarks.iter().map(|w| w.log_group.as_str()).collect();
    assert_eq!(names, vec!["/app/web", "/aws/lambda/job"]);
    assert_eq!(watermarks[0].last_export_ms, 1_700_000_000_000);
    assert!(watermarks.iter().all(|w| w.persisted));
    assert_eq!(
        watermarks[1],
        Watermark::stored(
            PREFIX,
            LogGroupName::new("/aws/lambda/job").unwrap(),
            1_600_000_000_000
        )
    );
}
