//! HTTP backend for TheMealDB.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::model::{DessertDetail, DessertSummary, MealsEnvelope};

use super::{ClientError, MealClient};

/// Public v1 API root.
pub const DEFAULT_BASE_URL: &str = "https://themealdb.com/api/json/v1/1";

const LIST_PATH: &str = "filter.php";
const DETAIL_PATH: &str = "lookup.php";
const DESSERT_CATEGORY: &str = "Dessert";

/// Client that issues GET requests against the live API.
pub struct LiveClient {
    client: Client,
    base_url: String,
}

impl LiveClient {
    /// Create a client from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client against [`DEFAULT_BASE_URL`] with default timeouts.
    pub fn with_defaults() -> Result<Self, ClientError> {
        Self::new(&ApiConfig::default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ClientError> {
        let raw = format!("{}/{}", self.base_url, path);
        Url::parse_with_params(&raw, params).map_err(|e| ClientError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        tracing::debug!(url = %url, "Sending recipe API request");

        let start = Instant::now();
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Recipe API error");
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!(
            url = %url,
            status = %status,
            latency_ms = start.elapsed().as_millis() as u64,
            bytes = body.len(),
            "Recipe API response received"
        );

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Failed to decode recipe API response");
            ClientError::Decode(e)
        })
    }
}

#[async_trait]
impl MealClient for LiveClient {
    fn name(&self) -> &'static str {
        "live"
    }

    async fn list_desserts(&self) -> Result<Vec<DessertSummary>, ClientError> {
        let url = self.endpoint(LIST_PATH, &[("c", DESSERT_CATEGORY)])?;
        let envelope: MealsEnvelope<DessertSummary> = self.get_json(url).await?;
        Ok(envelope.into_meals())
    }

    async fn fetch_detail(&self, id: &str) -> Result<Option<DessertDetail>, ClientError> {
        if id.is_empty() {
            return Err(ClientError::EmptyId);
        }
        let url = self.endpoint(DETAIL_PATH, &[("i", id)])?;
        let envelope: MealsEnvelope<DessertDetail> = self.get_json(url).await?;
        Ok(envelope.into_first())
    }
}
