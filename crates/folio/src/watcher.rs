use cosmic::iced::Subscription;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum WatcherEvent {
    Changed(PathBuf),
    Removed(PathBuf),
    Error(String),
}

/// Watches a content file. The parent directory is watched so that editors
/// that replace the file on save are still seen.
pub fn watch_file(file: Option<PathBuf>) -> Subscription<WatcherEvent> {
    Subscription::run_with_id(
        file.clone(),
        cosmic::iced::stream::channel(100, move |mut output| async move {
            use cosmic::iced_futures::futures::SinkExt;

            let Some((file, dir)) = file.and_then(|file| {
                let dir = file.parent()?.to_path_buf();
                Some((file, dir))
            }) else {
                // Nothing to watch, stay idle
                std::future::pending::<()>().await;
                unreachable!()
            };

            let (tx, mut rx) = mpsc::channel(100);

            let watcher_result = RecommendedWatcher::new(
                move |res: Result<Event, notify::Error>| {
                    let _ = tx.blocking_send(res);
                },
                Config::default(),
            );

            let mut watcher = match watcher_result {
                Ok(watcher) => watcher,
                Err(e) => {
                    let _ = output.send(WatcherEvent::Error(e.to_string())).await;
                    std::future::pending::<()>().await;
                    unreachable!();
                }
            };

            if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
                let _ = output.send(WatcherEvent::Error(e.to_string())).await;
                std::future::pending::<()>().await;
                unreachable!();
            }

            tracing::debug!(file = %file.display(), "watching content file");

            while let Some(event_results) = rx.recv().await {
                match event_results {
                    Ok(event) => {
                        for path in event.paths {
                            if let Some(msg) = classify(&file, event.kind, path) {
                                let _ = output.send(msg).await;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = output.send(WatcherEvent::Error(e.to_string())).await;
                    }
                }
            }

            std::future::pending::<()>().await;
            unreachable!()
        }),
    )
}

/// Events about other files in the directory are dropped.
fn classify(file: &Path, kind: EventKind, path: PathBuf) -> Option<WatcherEvent> {
    if path != file {
        return None;
    }

    match kind {
        EventKind::Create(_) | EventKind::Modify(_) => Some(WatcherEvent::Changed(path)),
        EventKind::Remove(_) => Some(WatcherEvent::Removed(path)),
        _ => None,
    }
}
