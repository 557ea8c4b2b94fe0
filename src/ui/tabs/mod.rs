mod intent;
mod reducer;
mod state;

pub use intent::TabsIntent;
pub use reducer::TabsReducer;
pub use state::TabsState;
