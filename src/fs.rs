use crate::errors::CoreError;
use crate::helpers::sanitize_user_path;
use std::fs;
use std::path::Path;

/// Filesystem boundary used by the deletion orchestrator.
///
/// Keeping this trait narrow makes it easy to write deterministic tests and
/// allows the host application to swap the trash backend.
pub trait FileSystem: Send + Sync {
    /// Counts the files that a move of `path` would remove.
    fn count_files(&self, path: &Path) -> crate::Result<u64>;

    /// Moves a single path (file or whole directory) to the trash.
    fn move_to_trash(&self, path: &Path) -> crate::Result<()>;
}

/// Default implementation backed by `std::fs`, `walkdir` and the OS trash.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn count_files(&self, path: &Path) -> crate::Result<u64> {
        crate::counter::count_files(path)
    }

    fn move_to_trash(&self, path: &Path) -> crate::Result<()> {
        move_to_trash(path)
    }
}

/// Moves `path` to the platform trash.
///
/// Fails with `NotFound` or `PermissionDenied` when the path cannot be
/// inspected or moved, and with `UnsupportedPlatform` where no trash exists.
pub fn move_to_trash(path: &Path) -> crate::Result<()> {
    fs::symlink_metadata(path).map_err(|err| CoreError::io(path, err))?;
    platform_trash(path)
}

#[cfg(any(
    windows,
    target_os = "macos",
    all(unix, not(target_os = "ios"), not(target_os = "android"))
))]
fn platform_trash(path: &Path) -> crate::Result<()> {
    trash::delete(path).map_err(|err| {
        log::error!(
            "trash operation failed for {}: {}",
            sanitize_user_path(path),
            err
        );
        trash_error(path, err)
    })
}

/// Classifies a `trash` failure so inaccessible paths keep their kind.
#[cfg(any(
    windows,
    target_os = "macos",
    all(unix, not(target_os = "ios"), not(target_os = "android"))
))]
fn trash_error(path: &Path, err: trash::Error) -> CoreError {
    match err {
        #[cfg(all(
            unix,
            not(target_os = "macos"),
            not(target_os = "ios"),
            not(target_os = "android")
        ))]
        trash::Error::FileSystem {
            path: failed,
            source,
        } => CoreError::io(failed, source),
        trash::Error::CouldNotAccess { .. } => CoreError::PermissionDenied(path.to_path_buf()),
        other => CoreError::trash(path, other.to_string()),
    }
}

#[cfg(not(any(
    windows,
    target_os = "macos",
    all(unix, not(target_os = "ios"), not(target_os = "android"))
)))]
fn platform_trash(path: &Path) -> crate::Result<()> {
    log::error!("no trash available for {}", sanitize_user_path(path));
    Err(CoreError::unsupported(format!(
        "no trash mechanism on {}",
        std::env::consts::OS
    )))
}
