//! Filesystem change source
//!
//! Each call to [`DirectoryWatcher::next_change`] registers a fresh watch,
//! blocks until the first file under the root is closed after writing, then
//! tears the watch down again. Nothing is observed while a build pass runs,
//! so the compiler's own output never triggers another pass.

use std::path::PathBuf;
use std::sync::mpsc::channel;

use notify::event::{AccessKind, AccessMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::ChangeSource;
use crate::domain::DirectoryChanged;
use crate::error::{BuildError, BuildResult};

#[derive(Debug, Clone)]
pub struct DirectoryWatcher {
    root: PathBuf,
    recursive: bool,
}

impl DirectoryWatcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: true,
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    fn watch_error(&self, e: notify::Error) -> BuildError {
        BuildError::Watch {
            path: self.root.clone(),
            message: e.to_string(),
        }
    }
}

impl ChangeSource for DirectoryWatcher {
    fn next_change(&mut self) -> BuildResult<Option<DirectoryChanged>> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    if is_close_write(&event.kind) {
                        let _ = tx.send(DirectoryChanged {
                            path: event.paths.into_iter().next(),
                        });
                    }
                }
            },
            Config::default(),
        )
        .map_err(|e| self.watch_error(e))?;

        let mode = if self.recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(&self.root, mode)
            .map_err(|e| self.watch_error(e))?;

        // Blocks until an event arrives; the sender lives inside `watcher`.
        let change = rx.recv().ok();
        drop(watcher);
        Ok(change)
    }
}

/// A file was closed after being opened for writing
pub fn is_close_write(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Access(AccessKind::Close(AccessMode::Write)))
}
