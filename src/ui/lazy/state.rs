use crate::page::Thumbnail;
use crate::ui::mvi::UiState;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ImagePhase {
    /// Placeholder only; real source not requested yet.
    #[default]
    Deferred,
    /// Real source requested, waiting for the loader.
    Loading,
    Loaded(Thumbnail),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LazyImage {
    pub source: PathBuf,
    pub alt: String,
    pub phase: ImagePhase,
    /// Blur placeholder is drawn until the real image has loaded.
    pub blurred: bool,
}

impl LazyImage {
    pub fn new(source: PathBuf, alt: String) -> Self {
        Self {
            source,
            alt,
            phase: ImagePhase::Deferred,
            blurred: true,
        }
    }

    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        match &self.phase {
            ImagePhase::Loaded(thumbnail) => Some(thumbnail),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LazyImagesState {
    pub images: Vec<LazyImage>,
}

impl UiState for LazyImagesState {}

impl LazyImagesState {
    pub fn get(&self, id: usize) -> Option<&LazyImage> {
        self.images.get(id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
