//! Deferred deletion work that reports back to the UI with a single message.

use crate::errors::CoreError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::models::{DeletionMessage, ProgressCounter};
use crate::orchestrator::DeletionOrchestrator;
use std::path::PathBuf;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::{self, JoinHandle};

/// A deletion request that has been prepared but not started.
///
/// Nothing touches the filesystem until the command is consumed by
/// [`run`](Self::run), [`execute`](Self::execute) or [`spawn`](Self::spawn).
/// Each of those yields exactly one [`DeletionMessage`].
pub struct DeleteCommand<F: FileSystem = RealFileSystem> {
    paths: Vec<PathBuf>,
    counter: ProgressCounter,
    orchestrator: DeletionOrchestrator<F>,
}

/// Prepares a request for `paths` that reports live progress through `counter`.
pub fn schedule_delete(paths: Vec<PathBuf>, counter: ProgressCounter) -> DeleteCommand {
    DeleteCommand::new(paths, counter, DeletionOrchestrator::new())
}

/// Single-path form of [`schedule_delete`].
pub fn schedule_delete_path(path: PathBuf, counter: ProgressCounter) -> DeleteCommand {
    schedule_delete(vec![path], counter)
}

impl<F: FileSystem + 'static> DeleteCommand<F> {
    pub fn new(
        paths: Vec<PathBuf>,
        counter: ProgressCounter,
        orchestrator: DeletionOrchestrator<F>,
    ) -> Self {
        Self {
            paths,
            counter,
            orchestrator,
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Handle the UI can poll while the command runs.
    pub fn counter(&self) -> &ProgressCounter {
        &self.counter
    }

    /// Runs the request on the calling thread. Blocks on filesystem calls.
    pub fn run(self) -> DeletionMessage {
        let started = Instant::now();
        let result = self.orchestrator.run(&self.paths, &self.counter);
        DeletionMessage::new(self.paths, result, started.elapsed())
    }

    /// Runs the request on tokio's blocking pool.
    pub async fn execute(self) -> DeletionMessage {
        let started = Instant::now();
        let paths = self.paths.clone();
        match task::spawn_blocking(move || self.run()).await {
            Ok(message) => message,
            Err(join_err) => {
                log::error!("deletion worker failed: {join_err}");
                DeletionMessage::new(
                    paths,
                    Err(CoreError::task(join_err.to_string())),
                    started.elapsed(),
                )
            }
        }
    }

    /// Starts the request in the background and posts its message to `sender`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(self, sender: UnboundedSender<DeletionMessage>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let message = self.execute().await;
            if sender.send(message).is_err() {
                log::warn!("deletion finished after the UI stopped listening");
            }
        })
    }
}
