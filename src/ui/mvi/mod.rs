//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every page behaviour (carousel, modal, tabs, scrolling, lazy images)
//! keeps its state behind a reducer so transitions stay testable without a
//! terminal.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Snapshot of one behaviour
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
