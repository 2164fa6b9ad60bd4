use std::path::Path;

use anyhow::Context;
use crossbeam_channel::{Receiver, unbounded};
use notify::{EventKind as NotifyKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::event::{Event, EventProvider};

/// Watches a path and surfaces created/modified files as `FileInput`.
///
/// Backed by the platform watcher from `notify`; its callback runs on the
/// watcher's own thread and hands events over a channel. Watcher errors
/// are logged and swallowed at this boundary so a broken watch never
/// blocks the poll cycle.
pub struct FileProvider {
    rx: Receiver<Event>,
    // Dropping the watcher stops the watch; keep it alive with the provider.
    _watcher: RecommendedWatcher,
}

impl FileProvider {
    pub fn watch(path: &Path) -> anyhow::Result<Self> {
        let (tx, rx) = unbounded();

        let mut watcher =
            notify::recommended_watcher(move |res: notify::Result<notify::Event>| match res {
                Ok(event) => {
                    if !matches!(event.kind, NotifyKind::Create(_) | NotifyKind::Modify(_)) {
                        return;
                    }
                    for path in event.paths {
                        let file_input = Event::FileInput {
                            file_name: path.display().to_string(),
                        };
                        if tx.send(file_input).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => log::warn!("file watcher error: {err}"),
            })
            .context("failed to create file watcher")?;

        watcher
            .watch(path, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {}", path.display()))?;
        log::debug!("watching {} for file input", path.display());

        Ok(Self { rx, _watcher: watcher })
    }
}

impl EventProvider for FileProvider {
    fn poll(&mut self, buf: &mut Vec<Event>) {
        buf.extend(self.rx.try_iter());
    }

    fn name(&self) -> &str {
        "file"
    }
}
