mod carousel;
mod intent;
mod reducer;
mod state;

pub use carousel::{Carousel, Dot};
pub use intent::SliderIntent;
pub use reducer::SliderReducer;
pub use state::SliderState;
