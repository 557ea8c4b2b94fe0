use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalIntent {
    /// Any "Open account" control.
    Open,
    /// Close control or overlay click.
    Close,
    /// Escape key. Only closes a visible modal.
    Escape,
}

impl Intent for ModalIntent {}
