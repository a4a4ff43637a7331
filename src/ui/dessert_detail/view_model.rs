//! View-model behind the dessert detail screen.

use std::sync::Arc;

use tokio::sync::watch;

use crate::client::{ClientError, LiveClient, SharedClient};
use crate::ui::mvi::Store;

use super::intent::DessertDetailIntent;
use super::reducer::DessertDetailReducer;
use super::state::DessertDetailState;

/// Fetches and exposes the recipe of one dessert.
pub struct DessertDetailViewModel {
    id: String,
    client: SharedClient,
    store: Store<DessertDetailReducer>,
}

impl DessertDetailViewModel {
    pub fn new(id: impl Into<String>, client: SharedClient) -> Self {
        Self {
            id: id.into(),
            client,
            store: Store::new(),
        }
    }

    /// View-model backed by the live API with default settings.
    pub fn live(id: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self::new(id, Arc::new(LiveClient::with_defaults()?)))
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DessertDetailState {
        self.store.state()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<DessertDetailState> {
        self.store.subscribe()
    }

    /// Fetch the recipe for this view-model's id.
    ///
    /// An unknown id and a failed request both end in `LoadStatus::Failed`
    /// with blank fields; they differ only in `last_error`.
    pub async fn load_detail(&self) {
        tracing::debug!(id = %self.id, backend = self.client.name(), "Loading dessert detail");
        self.store.dispatch(DessertDetailIntent::LoadStarted);

        match self.client.fetch_detail(&self.id).await {
            Ok(Some(detail)) => {
                tracing::debug!(
                    id = %self.id,
                    ingredients = detail.ingredients.len(),
                    "Dessert detail loaded"
                );
                self.store.dispatch(DessertDetailIntent::Loaded { detail });
            }
            Ok(None) => {
                tracing::warn!(id = %self.id, "No meal found for id");
                self.store.dispatch(DessertDetailIntent::NotFound);
            }
            Err(e) => {
                tracing::warn!(
                    id = %self.id,
                    error = %e,
                    error_type = e.error_type(),
                    "Failed to load dessert detail"
                );
                self.store.dispatch(DessertDetailIntent::LoadFailed {
                    message: e.to_string(),
                });
            }
        }
    }
}
