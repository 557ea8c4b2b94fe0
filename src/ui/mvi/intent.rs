//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Pointer and keyboard input (clicks, arrow keys)
/// - Viewport changes reported by the observers
/// - Loader results
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
