use crate::ui::mvi::UiState;

/// Active tab of the operations panel. The matching content panel is the
/// one with the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabsState {
    pub active: usize,
    pub count: usize,
}

impl UiState for TabsState {}

impl TabsState {
    pub fn is_active(&self, tab: usize) -> bool {
        tab < self.count && tab == self.active
    }
}
