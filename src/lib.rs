//! Trash-backed path deletion for the disk usage analyzer.
//! Turns a UI selection into one background request that moves each path to
//! the OS trash, counts the files it removes, and answers with one message.

pub mod command;
pub mod counter;
pub mod dedup;
pub mod errors;
pub mod fs;
pub mod helpers;
pub mod models;
pub mod orchestrator;

#[cfg(test)]
mod testing;

pub use command::{
    schedule_delete,
    schedule_delete_path,
    DeleteCommand,
};
pub use counter::count_files;
pub use dedup::{
    dedup_paths,
    dedup_paths_from,
    is_strict_ancestor,
};
pub use errors::{
    CoreError,
    ErrorKind,
    Result,
};
pub use fs::{
    move_to_trash,
    FileSystem,
    RealFileSystem,
};
pub use helpers::{
    format_duration,
    normalize_path,
    sanitize_user_path,
};
pub use models::{
    DeleteConfig,
    DeletionMessage,
    DeletionResult,
    ProgressCounter,
};
pub use orchestrator::DeletionOrchestrator;

/// Re-export a small stable API surface for the host application.
pub mod prelude {
    pub use crate::{
        command::*,
        errors::{CoreError, ErrorKind, Result},
        fs::{move_to_trash, FileSystem, RealFileSystem},
        models::*,
        orchestrator::DeletionOrchestrator,
    };
}
