//! Counts the files a trash move is about to take with it.

use crate::errors::CoreError;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Returns how many non-directory entries live at or below `path`.
///
/// A file (or a symlink, which is never followed) counts as one. A directory
/// contributes the files of its whole subtree but not itself, so an empty
/// directory yields zero. A missing path fails with [`CoreError::NotFound`].
pub fn count_files(path: &Path) -> crate::Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|err| CoreError::io(path, err))?;
    if !metadata.is_dir() {
        return Ok(1);
    }

    let mut count = 0;
    for entry in WalkDir::new(path).follow_links(false) {
        let entry = entry.map_err(|err| walk_error(path, err))?;
        if !entry.file_type().is_dir() {
            count += 1;
        }
    }
    Ok(count)
}

fn walk_error(root: &Path, err: walkdir::Error) -> CoreError {
    let path = err.path().unwrap_or(root).to_path_buf();
    match err.into_io_error() {
        Some(io_err) => CoreError::io(path, io_err),
        None => CoreError::Io(path, io::Error::other("filesystem loop detected")),
    }
}
