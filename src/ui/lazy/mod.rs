mod intent;
mod reducer;
mod state;

pub use intent::LazyImageIntent;
pub use reducer::LazyImageReducer;
pub use state::{ImagePhase, LazyImage, LazyImagesState};
