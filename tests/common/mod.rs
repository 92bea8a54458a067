//! In-memory collaborators for export run tests

#![allow(dead_code)]

use async_trait::async_trait;
use log_exporter::adapters::{Clock, LogGroupQuery, LogService, ParameterStore, Services};
use log_exporter::config::ExportConfig;
use log_exporter::domain::{
    ExportTaskRequest, LogGroup, LogGroupName, LogGroupPage, LogServiceError, ParameterName,
    ParameterStoreError,
};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const HOUR_MS: i64 = 60 * 60 * 1000;
pub const DAY_MS: i64 = 24 * HOUR_MS;
pub const NOW_MS: i64 = 1_700_000_000_000;
pub const PREFIX_PARAM: &str = "/log-exporter/prefixes";

/// Parameter store backed by a map, recording every write
#[derive(Default)]
pub struct InMemoryParameterStore {
    values: Mutex<BTreeMap<String, String>>,
    writes: Mutex<Vec<(String, String)>>,
    failing_reads: Mutex<HashMap<String, String>>,
    fail_writes: Mutex<bool>,
}

impl InMemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, name: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }

    pub fn value(&self, name: &str) -> Option<String> {
        self.values.lock().unwrap().get(name).cloned()
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }

    /// Make reads of `name` fail with a non-"not found" error
    pub fn fail_reads_of(&self, name: &str, message: &str) {
        self.failing_reads
            .lock()
            .unwrap()
            .insert(name.to_string(), message.to_string());
    }

    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }
}

#[async_trait]
impl ParameterStore for InMemoryParameterStore {
    async fn get_parameter(&self, name: &ParameterName) -> Result<String, ParameterStoreError> {
        if let Some(message) = self.failing_reads.lock().unwrap().get(name.as_str()) {
            return Err(ParameterStoreError::RequestFailed(message.clone()));
        }
        self.values
            .lock()
            .unwrap()
            .get(name.as_str())
            .cloned()
            .ok_or_else(|| ParameterStoreError::NotFound(name.to_string()))
    }

    async fn put_parameter(
        &self,
        name: &ParameterName,
        value: &str,
    ) -> Result<(), ParameterStoreError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(ParameterStoreError::RequestFailed(
                "AccessDeniedException".to_string(),
            ));
        }
        self.writes
            .lock()
            .unwrap()
            .push((name.to_string(), value.to_string()));
        self.insert(name.as_str(), value);
        Ok(())
    }

    async fn get_parameters_by_path(
        &self,
        path: &str,
    ) -> Result<Vec<(ParameterName, String)>, ParameterStoreError> {
        let base = format!("{}/", path.trim_end_matches('/'));
        let values = self.values.lock().unwrap();
        Ok(values
            .iter()
            .filter(|(name, _)| name.starts_with(&base))
            .map(|(name, value)| (ParameterName::new(name.as_str()).unwrap(), value.clone()))
            .collect())
    }
}

/// Log service with scripted listing pages and export responses
#[derive(Default)]
pub struct ScriptedLogService {
    pages: Mutex<HashMap<String, Vec<LogGroupPage>>>,
    listing_errors: Mutex<HashMap<String, String>>,
    export_responses: Mutex<VecDeque<Result<String, LogServiceError>>>,
    queries: Mutex<Vec<LogGroupQuery>>,
    export_requests: Mutex<Vec<ExportTaskRequest>>,
    next_task: AtomicI64,
}

impl ScriptedLogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `pages` for `prefix`; page N carries token "<prefix>#N" when more follow
    pub fn with_pages(&self, prefix: &str, pages: Vec<Vec<&str>>) {
        let count = pages.len();
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, names)| LogGroupPage {
                log_groups: names
                    .into_iter()
                    .map(|n| LogGroup::new(LogGroupName::new(n).unwrap()))
                    .collect(),
                next_token: (i + 1 < count).then(|| format!("{prefix}#{}", i + 1)),
            })
            .collect();
        self.pages.lock().unwrap().insert(prefix.to_string(), pages);
    }

    pub fn with_raw_pages(&self, prefix: &str, pages: Vec<LogGroupPage>) {
        self.pages.lock().unwrap().insert(prefix.to_string(), pages);
    }

    pub fn fail_listing(&self, prefix: &str, message: &str) {
        self.listing_errors
            .lock()
            .unwrap()
            .insert(prefix.to_string(), message.to_string());
    }

    /// Queue responses for the next export calls; once drained, calls succeed
    pub fn push_export_response(&self, response: Result<String, LogServiceError>) {
        self.export_responses.lock().unwrap().push_back(response);
    }

    pub fn push_limit_exceeded(&self, times: usize) {
        for _ in 0..times {
            self.push_export_response(Err(LogServiceError::LimitExceeded(
                "Resource limit exceeded.".to_string(),
            )));
        }
    }

    pub fn queries(&self) -> Vec<LogGroupQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn export_requests(&self) -> Vec<ExportTaskRequest> {
        self.export_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogService for ScriptedLogService {
    async fn describe_log_groups(
        &self,
        query: &LogGroupQuery,
    ) -> Result<LogGroupPage, LogServiceError> {
        self.queries.lock().unwrap().push(query.clone());

        if let Some(message) = self.listing_errors.lock().unwrap().get(&query.prefix) {
            return Err(LogServiceError::RequestFailed(message.clone()));
        }

        let pages = self.pages.lock().unwrap();
        let Some(pages) = pages.get(&query.prefix) else {
            return Ok(LogGroupPage::default());
        };

        let index = match &query.next_token {
            None => 0,
            Some(token) => token
                .rsplit('#')
                .next()
                .and_then(|i| i.parse::<usize>().ok())
                .unwrap_or(usize::MAX),
        };

        Ok(pages.get(index).cloned().unwrap_or_default())
    }

    async fn create_export_task(
        &self,
        request: &ExportTaskRequest,
    ) -> Result<String, LogServiceError> {
        self.export_requests.lock().unwrap().push(request.clone());

        match self.export_responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None => {
                let n = self.next_task.fetch_add(1, Ordering::SeqCst) + 1;
                Ok(format!("task-{n}"))
            }
        }
    }
}

/// Clock that stands still unless told otherwise and records sleeps
pub struct ManualClock {
    now_ms: AtomicI64,
    sleeps: Mutex<Vec<Duration>>,
}

impl ManualClock {
    pub fn at(now_ms: i64) -> Self {
        Self {
            now_ms: AtomicI64::new(now_ms),
            sleeps: Mutex::new(Vec::new()),
        }
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

/// Handles to the fakes behind a [`Services`] bundle
pub struct Harness {
    pub parameters: Arc<InMemoryParameterStore>,
    pub logs: Arc<ScriptedLogService>,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            parameters: Arc::new(InMemoryParameterStore::new()),
            logs: Arc::new(ScriptedLogService::new()),
            clock: Arc::new(ManualClock::at(NOW_MS)),
        }
    }

    pub fn services(&self) -> Services {
        Services {
            parameter_store: self.parameters.clone(),
            log_service: self.logs.clone(),
            clock: self.clock.clone(),
        }
    }

    /// Store the prefix list parameter
    pub fn with_prefixes(&self, prefixes: &[&str]) {
        let json = serde_json::to_string(prefixes).unwrap();
        self.parameters.insert(PREFIX_PARAM, &json);
    }
}

/// A fully configured export section
pub fn export_config() -> ExportConfig {
    ExportConfig {
        destination_bucket: Some("log-archive".to_string()),
        prefixes_parameter: Some(PREFIX_PARAM.to_string()),
        account_id: Some("123456789012".to_string()),
        ..ExportConfig::default()
    }
}
