use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SliderIntent {
    /// Build dots for `slide_count` slides and show slide 0.
    Init { slide_count: usize },
    /// "▶" control or right arrow.
    Next,
    /// "◀" control or left arrow.
    Previous,
    /// Programmatic jump by slide index, used by `App::goto_slide`.
    GoTo { slide: usize },
    /// Click on a dot; `tag` is the slide number the dot carries.
    DotClicked { tag: String },
}

impl Intent for SliderIntent {}
