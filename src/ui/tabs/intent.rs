use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabsIntent {
    Init { count: usize },
    Activate { tab: usize },
}

impl Intent for TabsIntent {}
