use crate::errors::CoreError;
use crate::helpers::format_duration;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Terminal outcome of one request: files trashed, or the first failure.
pub type DeletionResult = crate::Result<u64>;

/// Live count of trashed files, shared between the deletion worker and the UI.
///
/// Clones share the same underlying value. The worker is the only writer; the
/// UI reads it on its own redraw tick.
#[derive(Debug, Clone, Default)]
pub struct ProgressCounter(Arc<AtomicU64>);

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Adds `n` and returns the new total.
    pub fn add(&self, n: u64) -> u64 {
        self.0.fetch_add(n, Ordering::Relaxed) + n
    }
}

/// Options the host application passes to the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfig {
    /// Count files and advance progress without calling the trash.
    pub dry_run: bool,
}

impl DeleteConfig {
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// The single message a scheduled deletion delivers to the UI.
#[derive(Debug)]
pub struct DeletionMessage {
    paths: Vec<PathBuf>,
    result: DeletionResult,
    elapsed: Duration,
    finished_at: DateTime<Utc>,
}

impl DeletionMessage {
    pub fn new(paths: Vec<PathBuf>, result: DeletionResult, elapsed: Duration) -> Self {
        Self {
            paths,
            result,
            elapsed,
            finished_at: Utc::now(),
        }
    }

    /// Paths as the UI requested them, before deduplication.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn result(&self) -> &DeletionResult {
        &self.result
    }

    pub fn into_result(self) -> DeletionResult {
        self.result
    }

    pub fn count(&self) -> Option<u64> {
        self.result.as_ref().ok().copied()
    }

    pub fn error(&self) -> Option<&CoreError> {
        self.result.as_ref().err()
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    pub fn failed_path(&self) -> Option<&Path> {
        self.error().and_then(CoreError::path)
    }

    /// One-line status for the UI footer.
    pub fn summary(&self) -> String {
        match &self.result {
            Ok(1) => format!("Moved 1 file to Trash in {}", format_duration(self.elapsed)),
            Ok(count) => format!(
                "Moved {count} files to Trash in {}",
                format_duration(self.elapsed)
            ),
            Err(err) => format!("Delete failed: {err}"),
        }
    }
}
