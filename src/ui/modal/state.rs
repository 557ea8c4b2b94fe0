use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Shown,
}

impl UiState for ModalState {}

impl ModalState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Shown)
    }
}
