//! Backend that serves pre-recorded API responses from a directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::model::{DessertDetail, DessertSummary, MealsEnvelope};

use super::{ClientError, MealClient};

/// File holding the dessert list response.
pub const DESSERTS_FIXTURE: &str = "DessertsResponse.json";
/// Detail fixtures are named `MealResponse<id>.json`.
pub const MEAL_FIXTURE_PREFIX: &str = "MealResponse";

/// Reads `DessertsResponse.json` and `MealResponse<id>.json` from `dir`.
///
/// A missing detail fixture means the id is unknown and yields `Ok(None)`.
/// A missing list fixture is an error.
#[derive(Debug, Clone)]
pub struct FixtureClient {
    dir: PathBuf,
}

impl FixtureClient {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn desserts_path(&self) -> PathBuf {
        self.dir.join(DESSERTS_FIXTURE)
    }

    pub fn meal_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{MEAL_FIXTURE_PREFIX}{id}.json"))
    }
}

#[async_trait]
impl MealClient for FixtureClient {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn list_desserts(&self) -> Result<Vec<DessertSummary>, ClientError> {
        let path = self.desserts_path();
        tracing::debug!(path = %path.display(), "Reading dessert list fixture");

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| ClientError::Fixture { path, source })?;
        let envelope: MealsEnvelope<DessertSummary> = serde_json::from_slice(&bytes)?;
        Ok(envelope.into_meals())
    }

    async fn fetch_detail(&self, id: &str) -> Result<Option<DessertDetail>, ClientError> {
        if id.is_empty() {
            return Err(ClientError::EmptyId);
        }
        // Ids never name files outside the fixture directory.
        if id.contains(|c| c == '/' || c == '\\') || id.contains("..") {
            return Ok(None);
        }

        let path = self.meal_path(id);
        tracing::debug!(path = %path.display(), "Reading meal fixture");

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ClientError::Fixture { path, source }),
        };
        let envelope: MealsEnvelope<DessertDetail> = serde_json::from_slice(&bytes)?;
        Ok(envelope.into_first())
    }
}
