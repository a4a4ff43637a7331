//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. View-models
/// perform the side effects (fetches, timers) and hand the outcome to the
/// reducer as an intent.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// Must be a pure function: (State, Intent) -> State
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
