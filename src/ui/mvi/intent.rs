//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing a search, picking a sort order, pulling to refresh)
/// - System events (fetch results, debounce timers)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
