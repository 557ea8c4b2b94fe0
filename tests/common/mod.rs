//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use landing::config::Config;
use landing::page::{PageLayout, SectionId};
use landing::ui::app::{App, UiCommand};
use landing::ui::hit::HitTarget;
use ratatui::layout::Rect;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

pub const COLS: u16 = 100;
pub const ROWS: u16 = 31;

// -- App helpers --------------------------------------------------------------

/// App with default content laid out for a `COLS` x `ROWS` terminal.
pub fn make_app() -> App {
    make_app_with(Config::default())
}

pub fn make_app_with(config: Config) -> App {
    let mut app = App::new(config);
    app.on_resize(COLS, ROWS);
    app
}

/// App with a command receiver attached, so image requests are observable.
pub fn make_app_with_loader() -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(16);
    let mut app = App::new(Config::default());
    app.set_command_sender(tx);
    app.on_resize(COLS, ROWS);
    (app, rx)
}

pub fn layout(app: &App) -> PageLayout {
    app.layout().expect("layout computed on resize").clone()
}

/// Scroll until `section` is at the top of the viewport and let observers run.
pub fn scroll_into_view(app: &mut App, section: SectionId) {
    let row = layout(app).scroll_target(section);
    let delta = row as i32 - app.scroll().offset as i32;
    app.scroll_by(delta);
}

/// Run ticks until the smooth scroll settles.
pub fn settle(app: &mut App) {
    for _ in 0..200 {
        if !app.scroll().is_animating() {
            return;
        }
        app.on_tick();
    }
    panic!("smooth scroll did not settle");
}

// -- Click helpers ------------------------------------------------------------

/// Screen rectangle of `target` in the current hit map.
pub fn screen_rect(app: &App, target: &HitTarget) -> Rect {
    app.hit_map()
        .rect_of(target)
        .unwrap_or_else(|| panic!("{:?} is not on screen", target))
}

pub fn click_target(app: &mut App, target: &HitTarget) {
    let rect = screen_rect(app, target);
    app.on_click(rect.x, rect.y);
}

// -- Config helpers -----------------------------------------------------------

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
