pub mod app;
pub mod events;
pub mod footer;
pub mod hit;
pub mod input;
pub mod layout;
pub mod lazy;
pub mod loader;
pub mod modal;
pub mod mvi;
pub mod nav;
pub mod page_view;
pub mod render;
pub mod runtime;
pub mod scroll;
pub mod slider;
pub mod tabs;
pub mod terminal_guard;
pub mod theme;
