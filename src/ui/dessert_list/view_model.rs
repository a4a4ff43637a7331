//! View-model behind the dessert list screen.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::client::{ClientError, LiveClient, SharedClient};
use crate::model::SortOrder;
use crate::ui::mvi::Store;

use super::intent::DessertListIntent;
use super::reducer::DessertListReducer;
use super::state::DessertListState;

/// Quiet period the search text must hold before the list is re-projected.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Owns the dessert list, the search text and the sort order.
///
/// Sort order changes and completed loads re-project the list immediately.
/// Search text changes are debounced by [`SEARCH_DEBOUNCE`] on a background
/// task owned by the view-model. The task starts with the first search edit
/// and stops when the view-model is dropped.
pub struct DessertListViewModel {
    client: SharedClient,
    store: Arc<Store<DessertListReducer>>,
    search_tx: watch::Sender<String>,
    debounce_task: OnceLock<JoinHandle<()>>,
}

impl DessertListViewModel {
    /// Create a view-model fetching through `client`.
    pub fn new(client: SharedClient) -> Self {
        let (search_tx, _) = watch::channel(String::new());
        Self {
            client,
            store: Arc::new(Store::new()),
            search_tx,
            debounce_task: OnceLock::new(),
        }
    }

    /// View-model backed by the live API with default settings.
    pub fn live() -> Result<Self, ClientError> {
        Ok(Self::new(Arc::new(LiveClient::with_defaults()?)))
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> DessertListState {
        self.store.state()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<DessertListState> {
        self.store.subscribe()
    }

    /// Fetch the dessert list, replacing whatever was loaded before.
    ///
    /// Failures never propagate: they clear the list and land in
    /// `status`/`last_error`.
    pub async fn load_list(&self) {
        tracing::debug!(backend = self.client.name(), "Loading dessert list");
        self.store.dispatch(DessertListIntent::LoadStarted);

        match self.client.list_desserts().await {
            Ok(desserts) => {
                tracing::debug!(count = desserts.len(), "Dessert list loaded");
                self.store
                    .dispatch(DessertListIntent::LoadSucceeded { desserts });
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    error_type = e.error_type(),
                    "Failed to load dessert list"
                );
                self.store.dispatch(DessertListIntent::LoadFailed {
                    message: e.to_string(),
                });
            }
        }
    }

    /// Update the search field. The list follows once the text settles.
    ///
    /// Outside a Tokio runtime there is nothing to run the debounce on, so the
    /// text is applied right away.
    pub fn set_search_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.store
            .dispatch(DessertListIntent::SearchTextChanged { text: text.clone() });

        if self.ensure_debounce_task() {
            self.search_tx.send_replace(text);
        } else {
            tracing::debug!("No Tokio runtime, applying search text without debounce");
            self.store.dispatch(DessertListIntent::SearchSettled { text });
        }
    }

    /// Change the sort order and re-project right away.
    pub fn set_sort_order(&self, order: SortOrder) {
        self.store
            .dispatch(DessertListIntent::SortOrderChanged { order });
    }
}

impl DessertListViewModel {
    /// Spawn the debounce task on first use. Returns false without a runtime.
    fn ensure_debounce_task(&self) -> bool {
        if self.debounce_task.get().is_some() {
            return true;
        }
        let Ok(handle) = Handle::try_current() else {
            return false;
        };
        self.debounce_task.get_or_init(|| {
            handle.spawn(debounce_search(
                self.search_tx.subscribe(),
                Arc::clone(&self.store),
                SEARCH_DEBOUNCE,
            ))
        });
        true
    }
}

impl Drop for DessertListViewModel {
    fn drop(&mut self) {
        if let Some(task) = self.debounce_task.get() {
            task.abort();
        }
    }
}

/// Forward search text to the store once it has been stable for `interval`.
///
/// Every new value restarts the quiet period. Exits when the sender is dropped.
async fn debounce_search(
    mut search_rx: watch::Receiver<String>,
    store: Arc<Store<DessertListReducer>>,
    interval: Duration,
) {
    while search_rx.changed().await.is_ok() {
        loop {
            tokio::select! {
                changed = search_rx.changed() => {
                    if changed.is_err() {
                        return;
                    }
                }
                _ = tokio::time::sleep(interval) => break,
            }
        }

        let text = search_rx.borrow_and_update().clone();
        tracing::debug!(search = %text, "Search text settled");
        store.dispatch(DessertListIntent::SearchSettled { text });
    }
}
