//! Reducer for page scrolling.

use crate::ui::mvi::Reducer;
use crate::ui::scroll::intent::ScrollIntent;
use crate::ui::scroll::state::ScrollState;

pub struct ScrollReducer;

impl Reducer for ScrollReducer {
    type State = ScrollState;
    type Intent = ScrollIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScrollIntent::ScrollBy { delta } => {
                let offset = (state.offset as i32 + delta).clamp(0, state.max_offset as i32);
                ScrollState {
                    offset: offset as u16,
                    target: None,
                    ..state
                }
            }
            ScrollIntent::SmoothTo { row } => {
                let row = row.min(state.max_offset);
                ScrollState {
                    target: (row != state.offset).then_some(row),
                    ..state
                }
            }
            ScrollIntent::JumpTo { row } => ScrollState {
                offset: row.min(state.max_offset),
                target: None,
                ..state
            },
            ScrollIntent::SetBounds { max_offset } => ScrollState {
                offset: state.offset.min(max_offset),
                max_offset,
                target: state.target.map(|row| row.min(max_offset)),
            },
            ScrollIntent::Tick { divisor } => {
                let Some(target) = state.target else {
                    return state;
                };
                let distance = target as i32 - state.offset as i32;
                let divisor = divisor.max(1) as i32;
                // Ceiling division keeps at least one row of progress per tick.
                let step = (distance.abs() + divisor - 1) / divisor;
                let offset = state.offset as i32 + step * distance.signum();
                let offset = offset as u16;
                ScrollState {
                    offset,
                    target: (offset != target).then_some(target),
                    ..state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(max_offset: u16) -> ScrollState {
        ScrollReducer::reduce(ScrollState::default(), ScrollIntent::SetBounds { max_offset })
    }

    #[test]
    fn scroll_by_clamps_both_ends() {
        let state = ScrollReducer::reduce(bounded(10), ScrollIntent::ScrollBy { delta: -3 });
        assert_eq!(state.offset, 0);
        let state = ScrollReducer::reduce(state, ScrollIntent::ScrollBy { delta: 50 });
        assert_eq!(state.offset, 10);
    }

    #[test]
    fn smooth_scroll_converges() {
        let mut state = ScrollReducer::reduce(bounded(100), ScrollIntent::SmoothTo { row: 37 });
        let mut ticks = 0;
        while state.is_animating() {
            let before = state.offset;
            state = ScrollReducer::reduce(state, ScrollIntent::Tick { divisor: 4 });
            assert!(state.offset > before);
            ticks += 1;
            assert!(ticks < 100, "smooth scroll never finished");
        }
        assert_eq!(state.offset, 37);
    }

    #[test]
    fn smooth_scroll_upwards() {
        let state = ScrollReducer::reduce(bounded(100), ScrollIntent::JumpTo { row: 50 });
        let mut state = ScrollReducer::reduce(state, ScrollIntent::SmoothTo { row: 3 });
        while state.is_animating() {
            state = ScrollReducer::reduce(state, ScrollIntent::Tick { divisor: 3 });
        }
        assert_eq!(state.offset, 3);
    }

    #[test]
    fn smooth_to_current_row_does_not_animate() {
        let state = ScrollReducer::reduce(bounded(10), ScrollIntent::SmoothTo { row: 0 });
        assert!(!state.is_animating());
    }

    #[test]
    fn manual_scroll_cancels_animation() {
        let state = ScrollReducer::reduce(bounded(100), ScrollIntent::SmoothTo { row: 80 });
        let state = ScrollReducer::reduce(state, ScrollIntent::ScrollBy { delta: 1 });
        assert!(!state.is_animating());
        assert_eq!(state.offset, 1);
    }

    #[test]
    fn shrinking_bounds_clamps_offset_and_target() {
        let state = ScrollReducer::reduce(bounded(100), ScrollIntent::JumpTo { row: 90 });
        let state = ScrollReducer::reduce(state, ScrollIntent::SmoothTo { row: 20 });
        let state = ScrollReducer::reduce(state, ScrollIntent::SetBounds { max_offset: 10 });
        assert_eq!(state.offset, 10);
        assert_eq!(state.target, Some(10));
    }

    #[test]
    fn tick_without_target_is_noop() {
        let state = bounded(10);
        assert_eq!(ScrollReducer::reduce(state, ScrollIntent::Tick { divisor: 4 }), state);
    }
}
