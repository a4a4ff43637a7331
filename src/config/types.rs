use std::path::PathBuf;

use serde::Deserialize;

use crate::client::DEFAULT_BASE_URL;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// Settings for the live HTTP backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// API root, without the endpoint file (e.g., "https://themealdb.com/api/json/v1/1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Which backend serves meal data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientBackend {
    #[default]
    Live,
    Fixture,
}

/// Backend selection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: ClientBackend,
    /// Directory holding `DessertsResponse.json` and `MealResponse<id>.json`.
    /// Required when `backend = "fixture"`.
    #[serde(default)]
    pub fixtures_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Config {
    /// Switch to the fixture backend reading from `dir`.
    pub fn use_fixtures(&mut self, dir: impl Into<PathBuf>) {
        self.client.backend = ClientBackend::Fixture;
        self.client.fixtures_dir = Some(dir.into());
    }
}
