//! Reducer for deferred feature images.

use crate::ui::lazy::intent::LazyImageIntent;
use crate::ui::lazy::state::{ImagePhase, LazyImage, LazyImagesState};
use crate::ui::mvi::Reducer;

pub struct LazyImageReducer;

impl Reducer for LazyImageReducer {
    type State = LazyImagesState;
    type Intent = LazyImageIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LazyImageIntent::Init { sources } => LazyImagesState {
                images: sources
                    .into_iter()
                    .map(|(source, alt)| LazyImage::new(source, alt))
                    .collect(),
            },
            LazyImageIntent::Intersected { id } => {
                if let Some(image) = state.images.get_mut(id) {
                    if image.phase == ImagePhase::Deferred {
                        image.phase = ImagePhase::Loading;
                    }
                }
                state
            }
            LazyImageIntent::Loaded { id, thumbnail } => {
                if let Some(image) = state.images.get_mut(id) {
                    if image.phase == ImagePhase::Loading {
                        image.phase = ImagePhase::Loaded(thumbnail);
                        image.blurred = false;
                    }
                }
                state
            }
            LazyImageIntent::Failed { id, reason } => {
                if let Some(image) = state.images.get_mut(id) {
                    if image.phase == ImagePhase::Loading {
                        image.phase = ImagePhase::Failed(reason);
                    }
                }
                state
            }
        }
    }
}
