use crate::ui::mvi::UiState;

/// Viewport position within the page, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    /// Destination of a running smooth scroll.
    pub target: Option<u16>,
}

impl UiState for ScrollState {}

impl ScrollState {
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }
}
