//! Observable holder for reducer-driven state.

use std::marker::PhantomData;

use tokio::sync::watch;

use super::reducer::Reducer;

/// Holds the current state of one view and publishes changes.
///
/// Every mutation goes through [`Store::dispatch`], which applies one reducer
/// step under the channel lock. Observers only get notified when the reduced
/// state differs from the previous one.
pub struct Store<R: Reducer> {
    tx: watch::Sender<R::State>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self {
            tx,
            _reducer: PhantomData,
        }
    }

    /// Apply an intent. Returns true if the state changed.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        self.tx.send_if_modified(|state| {
            let next = R::reduce(state.clone(), intent);
            if next == *state {
                return false;
            }
            *state = next;
            true
        })
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.tx.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.tx.subscribe()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
