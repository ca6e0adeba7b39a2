//! Collapses a selection so that no path is trashed after one of its ancestors.

use crate::helpers::normalize_path;
use std::env;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

/// Returns true when `ancestor` contains `path` at a segment boundary.
/// A path is not its own ancestor.
pub fn is_strict_ancestor(ancestor: &Path, path: &Path) -> bool {
    path != ancestor && path.starts_with(ancestor)
}

/// Normalizes `paths` against the current working directory and drops
/// duplicates and descendants. See [`dedup_paths_from`].
pub fn dedup_paths<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    let base = env::current_dir().unwrap_or_else(|_| PathBuf::from(MAIN_SEPARATOR_STR));
    dedup_paths_from(&base, paths)
}

/// Normalizes `paths` against `base`, keeps the first occurrence of each and
/// drops every path that lies inside another requested path, wherever that
/// ancestor appears in the input. Order of the survivors is preserved.
pub fn dedup_paths_from<P: AsRef<Path>>(base: &Path, paths: &[P]) -> Vec<PathBuf> {
    let normalized: Vec<PathBuf> = paths
        .iter()
        .map(|path| normalize_path(base, path.as_ref()))
        .collect();

    let mut kept: Vec<PathBuf> = Vec::with_capacity(normalized.len());
    for candidate in &normalized {
        if kept.contains(candidate) {
            continue;
        }
        // An ancestor that was itself dropped has a kept ancestor of its own,
        // so checking the full input is equivalent to checking `kept`.
        if normalized
            .iter()
            .any(|other| is_strict_ancestor(other, candidate))
        {
            continue;
        }
        kept.push(candidate.clone());
    }
    kept
}
