//! Background image loader.
//!
//! Receives `UiCommand::LoadImage` from the UI thread, decodes on a blocking
//! task and reports back through the UI event channel.

use std::sync::mpsc;
use tokio::runtime::Handle;
use tokio::sync::mpsc as tokio_mpsc;
use tokio::task::JoinHandle;

use crate::page::{load_thumbnail, Thumbnail};
use crate::ui::app::{UiCommand, UiCommandSender};
use crate::ui::events::AppEvent;

/// Pending commands before `try_send` starts failing.
pub const COMMAND_QUEUE: usize = 16;

pub fn spawn_image_loader(
    handle: &Handle,
    events: mpsc::Sender<AppEvent>,
) -> (UiCommandSender, JoinHandle<()>) {
    let (tx, mut rx) = tokio_mpsc::channel::<UiCommand>(COMMAND_QUEUE);
    let task = handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            match command {
                UiCommand::LoadImage {
                    id,
                    path,
                    columns,
                    rows,
                } => {
                    let result = tokio::task::spawn_blocking(move || {
                        load_thumbnail(&path, columns, rows)
                    })
                    .await;
                    let event = match result {
                        Ok(Ok(thumbnail)) => loaded(id, thumbnail),
                        Ok(Err(err)) => AppEvent::ImageFailed {
                            id,
                            reason: err.to_string(),
                        },
                        Err(err) => AppEvent::ImageFailed {
                            id,
                            reason: format!("loader task failed: {}", err),
                        },
                    };
                    if events.send(event).is_err() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("image loader stopped");
    });
    (tx, task)
}

fn loaded(id: usize, thumbnail: Thumbnail) -> AppEvent {
    AppEvent::ImageLoaded { id, thumbnail }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::time::Duration;

    #[test]
    fn loads_image_and_reports_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pixel.png");
        RgbImage::from_pixel(8, 8, Rgb([200, 10, 10]))
            .save(&path)
            .expect("save png");

        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let (events_tx, events_rx) = mpsc::channel();
        let (commands, _task) = spawn_image_loader(runtime.handle(), events_tx);
        commands
            .try_send(UiCommand::LoadImage {
                id: 2,
                path,
                columns: 4,
                rows: 2,
            })
            .expect("send");

        match events_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::ImageLoaded { id, thumbnail }) => {
                assert_eq!(id, 2);
                assert_eq!((thumbnail.width, thumbnail.height), (4, 4));
            }
            _ => panic!("expected ImageLoaded"),
        }
    }

    #[test]
    fn missing_file_reports_failure() {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let (events_tx, events_rx) = mpsc::channel();
        let (commands, _task) = spawn_image_loader(runtime.handle(), events_tx);
        commands
            .try_send(UiCommand::LoadImage {
                id: 0,
                path: "/nonexistent/landing/img.png".into(),
                columns: 4,
                rows: 2,
            })
            .expect("send");

        match events_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::ImageFailed { id, .. }) => assert_eq!(id, 0),
            _ => panic!("expected ImageFailed"),
        }
    }
}
