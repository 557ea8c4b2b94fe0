use crate::page::Thumbnail;
use crate::ui::mvi::Intent;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum LazyImageIntent {
    /// Register deferred images; all start blurred.
    Init { sources: Vec<(PathBuf, String)> },
    /// Image came near the viewport: swap in the real source.
    Intersected { id: usize },
    /// Real source finished loading.
    Loaded { id: usize, thumbnail: Thumbnail },
    Failed { id: usize, reason: String },
}

impl Intent for LazyImageIntent {}
