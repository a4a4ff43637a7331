//! Remote access to the recipe API.
//!
//! [`MealClient`] is the seam the view-models depend on. Two backends ship
//! with the crate:
//!
//! - [`LiveClient`]: HTTP against TheMealDB
//! - [`FixtureClient`]: pre-recorded JSON documents on disk, for previews and tests

mod error;
mod fixture;
mod live;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{ClientBackend, Config};
use crate::model::{DessertDetail, DessertSummary};

pub use error::ClientError;
pub use fixture::{FixtureClient, DESSERTS_FIXTURE, MEAL_FIXTURE_PREFIX};
pub use live::{LiveClient, DEFAULT_BASE_URL};

/// Shared handle to a client backend.
pub type SharedClient = Arc<dyn MealClient>;

/// The two operations the view-models need from the recipe API.
#[async_trait]
pub trait MealClient: Send + Sync {
    /// Name of this backend for logging.
    fn name(&self) -> &'static str;

    /// Fetch every dessert in the dessert category.
    async fn list_desserts(&self) -> Result<Vec<DessertSummary>, ClientError>;

    /// Fetch the recipe for one dessert.
    ///
    /// Returns `Ok(None)` when the API knows no meal with this id.
    async fn fetch_detail(&self, id: &str) -> Result<Option<DessertDetail>, ClientError>;
}

/// Build the backend selected in configuration.
pub fn from_config(config: &Config) -> Result<SharedClient, ClientError> {
    let client: SharedClient = match &config.client.backend {
        ClientBackend::Live => Arc::new(LiveClient::new(&config.api)?),
        ClientBackend::Fixture => {
            let dir = config.client.fixtures_dir.clone().unwrap_or_default();
            Arc::new(FixtureClient::new(dir))
        }
    };

    tracing::info!(backend = client.name(), "Meal client selected");
    Ok(client)
}
