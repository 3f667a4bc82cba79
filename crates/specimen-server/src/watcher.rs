//! File watching for registry hot reload.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Quiet period that ends a burst of writes.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// A registry document (.json, .yaml, .yml, .toml) changed
    RegistryChanged(PathBuf),

    /// An example source (.tsx, .jsx) changed, was added or removed
    ExampleChanged(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            WatchEvent::RegistryChanged(path) | WatchEvent::ExampleChanged(path) => path,
        }
    }
}

/// File watcher for detecting registry and example changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given paths.
    ///
    /// Paths that do not exist are skipped. Returns the watcher and a
    /// channel to receive events; dropping the watcher closes the channel.
    pub fn new(
        paths: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for path in paths {
            if path.exists() {
                watcher
                    .watch(path, RecursiveMode::Recursive)
                    .map_err(std::io::Error::other)?;
            } else {
                tracing::debug!("Not watching missing path {}", path.display());
            }
        }

        std::thread::spawn(move || {
            while let Some(watch_event) = next_settled(&sync_rx, DEBOUNCE) {
                if async_tx.blocking_send(watch_event).is_err() {
                    break;
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Wait for a relevant change, then for the burst around it to settle.
///
/// Returns the last relevant event once nothing relevant arrived for
/// `quiet`, or `None` when the sender is gone and nothing is pending.
fn next_settled(rx: &mpsc::Receiver<notify::Event>, quiet: Duration) -> Option<WatchEvent> {
    let mut pending = loop {
        let event = rx.recv().ok()?;
        if let Some(watch_event) = relevant(&event) {
            break watch_event;
        }
    };

    loop {
        match rx.recv_timeout(quiet) {
            Ok(event) => {
                if let Some(watch_event) = relevant(&event) {
                    pending = watch_event;
                }
            }
            // Quiet for long enough, or the watcher is gone.
            Err(_) => return Some(pending),
        }
    }
}

fn relevant(event: &notify::Event) -> Option<WatchEvent> {
    event
        .paths
        .iter()
        .find_map(|path| classify_event(path, &event.kind))
}

/// Classify a notify event into a [`WatchEvent`].
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    if !matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return None;
    }

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "json" | "yaml" | "yml" | "toml" => Some(WatchEvent::RegistryChanged(path.to_path_buf())),
        "tsx" | "jsx" => Some(WatchEvent::ExampleChanged(path.to_path_buf())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind};
    use notify::EventKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn classifies_by_extension() {
        let modify = EventKind::Modify(ModifyKind::Any);

        assert_eq!(
            classify_event(Path::new("registry.yaml"), &modify),
            Some(WatchEvent::RegistryChanged(PathBuf::from("registry.yaml")))
        );
        assert_eq!(
            classify_event(Path::new("snippets/button.tsx"), &EventKind::Create(CreateKind::File)),
            Some(WatchEvent::ExampleChanged(PathBuf::from("snippets/button.tsx")))
        );
        assert_eq!(classify_event(Path::new("notes.md"), &modify), None);
        assert_eq!(
            classify_event(Path::new("registry.json"), &EventKind::Access(AccessKind::Any)),
            None
        );
    }

    fn modified(path: &str) -> notify::Event {
        notify::Event::new(EventKind::Modify(ModifyKind::Any)).add_path(PathBuf::from(path))
    }

    #[test]
    fn forwards_the_last_event_of_a_burst() {
        let (tx, rx) = mpsc::channel();
        tx.send(modified("registry.yaml")).unwrap();
        tx.send(modified("snippets/badge.tsx")).unwrap();
        tx.send(modified("notes.md")).unwrap();
        tx.send(modified("registry.json")).unwrap();

        let event = next_settled(&rx, Duration::from_millis(20));
        assert_eq!(event, Some(WatchEvent::RegistryChanged(PathBuf::from("registry.json"))));

        drop(tx);
        assert_eq!(next_settled(&rx, Duration::from_millis(20)), None);
    }

    #[test]
    fn late_write_in_a_burst_is_not_dropped() {
        let (tx, rx) = mpsc::channel();
        let writer = std::thread::spawn(move || {
            tx.send(modified("registry.yaml")).unwrap();
            std::thread::sleep(Duration::from_millis(30));
            tx.send(modified("snippets/badge.tsx")).unwrap();
            tx
        });

        let event = next_settled(&rx, Duration::from_millis(200));
        let _tx = writer.join().unwrap();

        assert_eq!(
            event,
            Some(WatchEvent::ExampleChanged(PathBuf::from("snippets/badge.tsx")))
        );
    }

    #[tokio::test]
    async fn watches_file_changes() {
        let temp = tempdir().unwrap();
        let registry = temp.path().join("registry.json");

        let (watcher, mut rx) = FileWatcher::new(&[temp.path().to_path_buf()]).unwrap();

        // Give inotify time to set up
        tokio::time::sleep(Duration::from_millis(100)).await;

        fs::write(&registry, r#"{"components": {}}"#).unwrap();

        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        drop(watcher);

        let event = event
            .expect("timeout waiting for file watch event")
            .expect("channel should not be closed");
        assert_eq!(event.path().file_name(), registry.file_name());
    }
}
