use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse, InputAction};
use crate::ui::loader::spawn_image_loader;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

pub fn run(config: Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("landing-loader")
        .enable_all()
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate, shutdown.clone());
    let (commands, loader) = spawn_image_loader(runtime.handle(), events.sender());
    app.set_command_sender(commands);

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols.max(1), rows.max(1));
    }
    tracing::info!("page ready");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::Quit {
                    break;
                }
            }
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols.max(1), rows.max(1)),
            Ok(AppEvent::ImageLoaded { id, thumbnail }) => app.on_image_loaded(id, thumbnail),
            Ok(AppEvent::ImageFailed { id, reason }) => app.on_image_failed(id, reason),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    loader.abort();
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("page closed");
    Ok(())
}
