//! Reducer for the testimonial carousel.

use crate::ui::mvi::Reducer;

use super::carousel::Carousel;
use super::intent::SliderIntent;
use super::state::SliderState;

pub struct SliderReducer;

impl Reducer for SliderReducer {
    type State = SliderState;
    type Intent = SliderIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SliderIntent::Init { slide_count } => match Carousel::new(slide_count) {
                Some(carousel) => SliderState::Active(carousel),
                None => {
                    tracing::warn!("Slider has no slides; navigation disabled");
                    SliderState::Empty
                }
            },
            SliderIntent::Next => match state {
                SliderState::Active(mut carousel) => {
                    carousel.next();
                    tracing::debug!(slide = carousel.current(), "slider: next");
                    SliderState::Active(carousel)
                }
                other => other,
            },
            SliderIntent::Previous => match state {
                SliderState::Active(mut carousel) => {
                    carousel.previous();
                    tracing::debug!(slide = carousel.current(), "slider: previous");
                    SliderState::Active(carousel)
                }
                other => other,
            },
            SliderIntent::GoTo { slide } => match state {
                SliderState::Active(mut carousel) => {
                    if !carousel.goto_slide(slide) {
                        tracing::debug!(slide, "slider: ignoring out-of-range slide");
                    }
                    SliderState::Active(carousel)
                }
                other => other,
            },
            SliderIntent::DotClicked { tag } => match state {
                SliderState::Active(mut carousel) => {
                    match carousel.slide_for_tag(&tag) {
                        Some(slide) => {
                            carousel.goto_slide(slide);
                            tracing::debug!(slide, "slider: dot clicked");
                        }
                        None => tracing::debug!(%tag, "slider: ignoring invalid dot tag"),
                    }
                    SliderState::Active(carousel)
                }
                other => other,
            },
        }
    }
}
