use std::{
    io,
    path::{Path, PathBuf},
};

/// Error type shared by every stage of a deletion request.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    /// The path vanished or never existed.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The path exists but cannot be read or moved.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Platform-specific behavior not available in this environment.
    #[error("unsupported platform behavior: {0}")]
    UnsupportedPlatform(String),

    /// File system I/O failure that is neither a missing path nor a denial.
    #[error("I/O error while accessing {0}")]
    Io(PathBuf, #[source] io::Error),

    /// The OS trash service rejected the move.
    #[error("failed to move {path} to trash: {message}")]
    Trash { path: PathBuf, message: String },

    /// The background worker running the request died before finishing.
    #[error("deletion task failed: {0}")]
    Task(String),
}

/// Coarse classification surfaced to the UI.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    Unsupported,
    Unknown,
}

impl CoreError {
    /// Wraps an I/O error for `path`, promoting missing and denied paths to
    /// their dedicated variants.
    pub fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        let path = path.into();
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Io(path, error),
        }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedPlatform(message.into())
    }

    pub fn trash(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Trash {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn task(message: impl Into<String>) -> Self {
        Self::Task(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Self::UnsupportedPlatform(_) => ErrorKind::Unsupported,
            Self::Io(..) | Self::Trash { .. } | Self::Task(_) => ErrorKind::Unknown,
        }
    }

    /// Path that caused the failure, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound(path)
            | Self::PermissionDenied(path)
            | Self::Io(path, _)
            | Self::Trash { path, .. } => Some(path),
            Self::UnsupportedPlatform(_) | Self::Task(_) => None,
        }
    }
}

/// Shared result alias for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
