use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollIntent {
    /// Manual scrolling (keys, wheel). Cancels a running smooth scroll.
    ScrollBy { delta: i32 },
    /// Animate towards `row` over the next ticks.
    SmoothTo { row: u16 },
    /// Move to `row` immediately.
    JumpTo { row: u16 },
    /// Page height changed; clamp offset and target.
    SetBounds { max_offset: u16 },
    /// Advance a smooth scroll by `1 / divisor` of the remaining distance.
    Tick { divisor: u16 },
}

impl Intent for ScrollIntent {}
