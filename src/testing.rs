//! Test doubles shared by the orchestrator and command tests.

use crate::errors::CoreError;
use crate::fs::{FileSystem, RealFileSystem};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Moves paths into a local "bin" directory instead of the OS trash.
pub(crate) struct FolderTrash {
    bin: PathBuf,
    fail_on: Option<PathBuf>,
    moved: Mutex<Vec<PathBuf>>,
}

impl FolderTrash {
    pub(crate) fn new(bin: &Path) -> Self {
        fs::create_dir_all(bin).unwrap();
        Self {
            bin: bin.to_path_buf(),
            fail_on: None,
            moved: Mutex::new(Vec::new()),
        }
    }

    /// Makes the trash reject `path` with a permission error.
    pub(crate) fn failing_on(mut self, path: &Path) -> Self {
        self.fail_on = Some(path.to_path_buf());
        self
    }

    pub(crate) fn moved(&self) -> Vec<PathBuf> {
        self.moved.lock().unwrap().clone()
    }
}

impl FileSystem for FolderTrash {
    fn count_files(&self, path: &Path) -> crate::Result<u64> {
        RealFileSystem.count_files(path)
    }

    fn move_to_trash(&self, path: &Path) -> crate::Result<()> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(CoreError::PermissionDenied(path.to_path_buf()));
        }
        let mut moved = self.moved.lock().unwrap();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "item".to_string());
        let destination = self.bin.join(format!("{}-{name}", moved.len()));
        fs::rename(path, &destination).map_err(|err| CoreError::io(path, err))?;
        moved.push(path.to_path_buf());
        Ok(())
    }
}

/// Wraps [`FolderTrash`] and parks the worker inside `move_to_trash` for one
/// path until the test releases it.
pub(crate) struct GatedTrash {
    inner: FolderTrash,
    gate: PathBuf,
    parked: UnboundedSender<()>,
    release: Mutex<mpsc::Receiver<()>>,
}

/// Test-side handles for a [`GatedTrash`].
pub(crate) struct Gate {
    pub(crate) parked: UnboundedReceiver<()>,
    pub(crate) release: mpsc::Sender<()>,
}

impl GatedTrash {
    pub(crate) fn new(inner: FolderTrash, gate: &Path) -> (Self, Gate) {
        let (parked_tx, parked_rx) = unbounded_channel();
        let (release_tx, release_rx) = mpsc::channel();
        let trash = Self {
            inner,
            gate: gate.to_path_buf(),
            parked: parked_tx,
            release: Mutex::new(release_rx),
        };
        let gate = Gate {
            parked: parked_rx,
            release: release_tx,
        };
        (trash, gate)
    }
}

impl FileSystem for GatedTrash {
    fn count_files(&self, path: &Path) -> crate::Result<u64> {
        self.inner.count_files(path)
    }

    fn move_to_trash(&self, path: &Path) -> crate::Result<()> {
        if path == self.gate {
            let _ = self.parked.send(());
            let _ = self.release.lock().unwrap().recv();
        }
        self.inner.move_to_trash(path)
    }
}
