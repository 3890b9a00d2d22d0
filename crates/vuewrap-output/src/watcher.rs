//! Manifest watching for regeneration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use notify::event::{ModifyKind, RenameMode};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;
use vuewrap_manifest::ManifestFormat;

const DEBOUNCE: Duration = Duration::from_millis(100);

/// Events emitted by the manifest watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// Manifest was created or modified
    Changed(PathBuf),

    /// Manifest was deleted or renamed away
    Removed(PathBuf),
}

/// What a watcher listens to for a configured manifest path.
#[derive(Debug, Clone, PartialEq, Eq)]
enum WatchTarget {
    /// A single manifest file, watched through its parent directory
    File { dir: PathBuf, path: PathBuf },

    /// A directory of manifests
    Dir(PathBuf),
}

impl WatchTarget {
    /// Resolve the manifest path. The manifest file itself may not exist
    /// yet, but its directory must.
    fn for_manifest(manifest: &Path) -> io::Result<Self> {
        if manifest.is_dir() {
            return Ok(WatchTarget::Dir(fs::canonicalize(manifest)?));
        }

        let file_name = manifest.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Not a manifest path: {}", manifest.display()),
            )
        })?;
        let parent = match manifest.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let dir = fs::canonicalize(parent).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Cannot watch {}: {}", parent.display(), e),
            )
        })?;
        let path = dir.join(file_name);

        Ok(WatchTarget::File { dir, path })
    }

    fn root(&self) -> &Path {
        match self {
            WatchTarget::File { dir, .. } => dir.as_path(),
            WatchTarget::Dir(dir) => dir.as_path(),
        }
    }

    fn mode(&self) -> RecursiveMode {
        match self {
            WatchTarget::File { .. } => RecursiveMode::NonRecursive,
            WatchTarget::Dir(_) => RecursiveMode::Recursive,
        }
    }

    fn matches(&self, path: &Path) -> bool {
        match self {
            WatchTarget::File { path: target, .. } => path == target.as_path(),
            WatchTarget::Dir(dir) => {
                path.starts_with(dir) && ManifestFormat::from_path(path).is_some()
            }
        }
    }

    /// Classify a notify event, keeping the last relevant path.
    fn classify(&self, event: &notify::Event) -> Option<WatchEvent> {
        event
            .paths
            .iter()
            .filter(|p| self.matches(p))
            .filter_map(|p| classify_kind(p, &event.kind))
            .last()
    }
}

/// File watcher for manifest changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Watch a manifest file or directory of manifests.
    ///
    /// A manifest file is watched through its parent directory, so it may be
    /// created after the watcher starts and survives write-and-rename saves.
    /// Fails if the file's directory (or the manifest directory) is missing.
    ///
    /// Returns the watcher and a channel to receive events.
    pub fn new(
        manifest: &Path,
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), io::Error> {
        let target = WatchTarget::for_manifest(manifest)?;
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(io::Error::other)?;

        watcher
            .watch(target.root(), target.mode())
            .map_err(io::Error::other)?;
        tracing::debug!("Watching {}", target.root().display());

        std::thread::spawn(move || {
            while let Ok(event) = sync_rx.recv() {
                let mut pending = target.classify(&event);

                // Coalesce a burst into its last relevant event
                loop {
                    match sync_rx.recv_timeout(DEBOUNCE) {
                        Ok(next) => {
                            if let Some(e) = target.classify(&next) {
                                pending = Some(e);
                            }
                        }
                        Err(RecvTimeoutError::Timeout) => break,
                        Err(RecvTimeoutError::Disconnected) => {
                            if let Some(e) = pending {
                                let _ = async_tx.blocking_send(e);
                            }
                            return;
                        }
                    }
                }

                if let Some(e) = pending {
                    if async_tx.blocking_send(e).is_err() {
                        return;
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

fn classify_kind(path: &Path, kind: &EventKind) -> Option<WatchEvent> {
    match kind {
        EventKind::Remove(_) | EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
            Some(WatchEvent::Removed(path.to_path_buf()))
        }
        EventKind::Create(_) | EventKind::Modify(_) => Some(WatchEvent::Changed(path.to_path_buf())),
        _ => None,
    }
}
