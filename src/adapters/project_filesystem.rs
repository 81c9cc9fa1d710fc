use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// Filesystem-backed implementation of [`ProjectFilesystem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemProject;

impl FilesystemProject {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectFilesystem for FilesystemProject {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        let entries =
            fs::read_dir(path).map_err(|e| AppError::file_operation("read directory", path, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AppError::file_operation("read directory", path, e))?;
            paths.push(entry.path());
        }
        paths.sort();
        Ok(paths)
    }

    fn walk_files(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(path).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let failed = e.path().unwrap_or(path).to_path_buf();
                AppError::file_operation("walk directory", failed, io::Error::from(e))
            })?;
            // Symlinked files count when their target is a regular file; symlinked
            // directories are not descended into.
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink()
                    && fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file()));
            if is_file {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|e| AppError::file_operation("read", path, e))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(|e| AppError::file_operation("create directory", path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64, AppError> {
        if to.exists() && same_file(from, to)? {
            return Err(AppError::file_operation(
                "copy descriptor to",
                to,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("'{}' is the same file", from.display()),
                ),
            ));
        }

        fs::copy(from, to).map_err(|e| {
            AppError::file_operation(
                "copy descriptor to",
                to,
                io::Error::new(e.kind(), format!("from '{}': {e}", from.display())),
            )
        })
    }
}

/// `fs::copy` truncates the destination first, so copying a file onto itself empties it.
fn same_file(from: &Path, to: &Path) -> Result<bool, AppError> {
    let from = fs::canonicalize(from).map_err(|e| AppError::file_operation("resolve", from, e))?;
    let to = fs::canonicalize(to).map_err(|e| AppError::file_operation("resolve", to, e))?;
    Ok(from == to)
}
