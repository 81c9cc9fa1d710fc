//! Project-level filesystem operations.
//!
//! This port provides the minimal file I/O the exporter needs. It does not
//! own layout semantics (`workdir`, `.srcs`, `.xci`); those belong to
//! `domain::layout`.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for filesystem access during discovery and export.
///
/// All paths are absolute (already joined with the project root).
pub trait ProjectFilesystem {
    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// List immediate entries of a directory, sorted by path.
    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Recursively list regular files under a directory, sorted by file name
    /// within each directory. Symlinks are not followed.
    fn walk_files(&self, path: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    /// Create a directory and all parent directories. No-op if present.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Copy a file byte-for-byte, overwriting the destination.
    ///
    /// Returns the number of bytes copied.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64, AppError>;
}
