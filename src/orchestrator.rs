use crate::dedup::dedup_paths;
use crate::fs::{FileSystem, RealFileSystem};
use crate::helpers::sanitize_user_path;
use crate::models::{DeleteConfig, DeletionResult, ProgressCounter};
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;

/// Runs a selection of paths through count-then-trash, one path at a time.
pub struct DeletionOrchestrator<F: FileSystem = RealFileSystem> {
    fs: Arc<F>,
    config: DeleteConfig,
}

impl DeletionOrchestrator<RealFileSystem> {
    pub fn new() -> Self {
        Self::with_file_system(Arc::new(RealFileSystem))
    }
}

impl Default for DeletionOrchestrator<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> Clone for DeletionOrchestrator<F> {
    fn clone(&self) -> Self {
        Self {
            fs: Arc::clone(&self.fs),
            config: self.config.clone(),
        }
    }
}

impl<F: FileSystem> DeletionOrchestrator<F> {
    pub fn with_file_system(fs: Arc<F>) -> Self {
        Self {
            fs,
            config: DeleteConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DeleteConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DeleteConfig {
        &self.config
    }

    /// Counts the files under `path`, trashes it and credits the count to
    /// `counter`. The counter is untouched when either step fails.
    pub fn trash_path_with_progress(
        &self,
        path: &Path,
        counter: &ProgressCounter,
    ) -> crate::Result<u64> {
        let count = self.fs.count_files(path)?;
        if self.config.dry_run {
            debug!("dry run: would trash {} ({count} files)", sanitize_user_path(path));
        } else {
            self.fs.move_to_trash(path)?;
            debug!("trashed {} ({count} files)", sanitize_user_path(path));
        }
        counter.add(count);
        Ok(count)
    }

    /// Deduplicates `paths` and trashes the survivors in input order.
    ///
    /// The first failure aborts the rest of the request; increments from paths
    /// that already succeeded stay on the counter.
    pub fn run<P: AsRef<Path>>(&self, paths: &[P], counter: &ProgressCounter) -> DeletionResult {
        let targets = dedup_paths(paths);
        if targets.len() < paths.len() {
            debug!(
                "skipping {} nested or duplicate paths",
                paths.len() - targets.len()
            );
        }

        for path in &targets {
            if let Err(err) = self.trash_path_with_progress(path, counter) {
                warn!(
                    "aborting delete at {} after {} files: {err}",
                    sanitize_user_path(path),
                    counter.get()
                );
                return Err(err);
            }
        }

        let total = counter.get();
        info!("moved {total} files from {} paths to trash", targets.len());
        Ok(total)
    }
}
