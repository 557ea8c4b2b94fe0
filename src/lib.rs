pub mod cli;
pub mod config;
pub mod logging;
pub mod page;
pub mod shutdown;
pub mod ui;
