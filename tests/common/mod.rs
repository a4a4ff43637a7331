//! Shared test utilities and stub clients.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use dessert_recipes::client::{ClientError, FixtureClient, MealClient, SharedClient};
use dessert_recipes::model::{DessertDetail, DessertSummary};
use std::collections::HashMap;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::{watch, Notify};

/// Generous upper bound for waits that include the search debounce.
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(2);

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Directory with the bundled fixture documents.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Fixture client over the bundled fixture documents.
pub fn fixture_client() -> SharedClient {
    Arc::new(FixtureClient::new(fixtures_dir()))
}

/// Create a temporary fixture directory with the given files.
pub fn temp_fixtures(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        std::fs::write(temp_dir.path().join(name), content).expect("Failed to write fixture");
    }
    temp_dir
}

/// Wait until `predicate` holds for the observed state, or panic after [`WAIT_TIMEOUT`].
pub async fn wait_for_state<T, F>(rx: &mut watch::Receiver<T>, predicate: F) -> T
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    tokio::time::timeout(WAIT_TIMEOUT, rx.wait_for(predicate))
        .await
        .expect("Timed out waiting for state")
        .expect("State channel closed")
        .clone()
}

/// In-memory client with scripted responses.
///
/// With a gate set, every call waits for `Notify::notify_one` before
/// answering so tests can observe the Loading state.
#[derive(Default)]
pub struct StubClient {
    desserts: Vec<DessertSummary>,
    details: HashMap<String, DessertDetail>,
    fail_status: Option<u16>,
    gate: Option<Arc<Notify>>,
}

impl StubClient {
    pub fn with_desserts(names: &[&str]) -> Self {
        let desserts = names
            .iter()
            .enumerate()
            .map(|(i, name)| DessertSummary::new(format!("{}", 52000 + i), *name, ""))
            .collect();
        Self {
            desserts,
            ..Self::default()
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }

    pub fn with_detail(mut self, detail: DessertDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    async fn respond<T>(&self, value: impl FnOnce() -> T) -> Result<T, ClientError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match self.fail_status {
            Some(status) => Err(ClientError::HttpStatus { status }),
            None => Ok(value()),
        }
    }
}

#[async_trait]
impl MealClient for StubClient {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn list_desserts(&self) -> Result<Vec<DessertSummary>, ClientError> {
        self.respond(|| self.desserts.clone()).await
    }

    async fn fetch_detail(&self, id: &str) -> Result<Option<DessertDetail>, ClientError> {
        self.respond(|| self.details.get(id).cloned()).await
    }
}
