//! Base trait for UI state in MVI architecture.

/// Marker trait for page behaviour state.
///
/// States should be:
/// - Cheap to move through a reducer (Clone when a copy is needed)
/// - Self-contained (all data needed to render the block)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
