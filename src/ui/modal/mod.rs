mod intent;
mod reducer;
mod state;

pub use intent::ModalIntent;
pub use reducer::ModalReducer;
pub use state::ModalState;
