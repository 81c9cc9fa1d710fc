use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// In-memory project filesystem for testing.
///
/// Directories are tracked explicitly; adding a file registers its ancestors.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    pub files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    pub dirs: RefCell<BTreeSet<PathBuf>>,
    /// Paths created or written through the port, in order.
    pub writes: RefCell<Vec<PathBuf>>,
    /// Destination whose copy should fail.
    pub fail_copy_to: RefCell<Option<PathBuf>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.borrow_mut().insert(path.to_path_buf(), content.as_bytes().to_vec());
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn fail_copy_to(&self, path: impl Into<PathBuf>) {
        *self.fail_copy_to.borrow_mut() = Some(path.into());
    }

    fn not_found(action: &'static str, path: &Path) -> AppError {
        AppError::file_operation(action, path, io::Error::from(io::ErrorKind::NotFound))
    }
}

impl ProjectFilesystem for MemoryFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_dir(path) || self.files.borrow().contains_key(path)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        if !self.is_dir(path) {
            return Err(Self::not_found("read directory", path));
        }

        let dirs = self.dirs.borrow();
        let files = self.files.borrow();
        let children: BTreeSet<PathBuf> = dirs
            .iter()
            .chain(files.keys())
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect();
        Ok(children.into_iter().collect())
    }

    fn walk_files(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        if !self.is_dir(path) {
            return Err(Self::not_found("walk directory", path));
        }
        Ok(self.files.borrow().keys().filter(|p| p.starts_with(path)).cloned().collect())
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        self.content(path).ok_or_else(|| Self::not_found("read", path))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.add_dir(path);
        self.writes.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64, AppError> {
        if self.fail_copy_to.borrow().as_deref() == Some(to) {
            return Err(AppError::file_operation(
                "copy descriptor to",
                to,
                io::Error::from(io::ErrorKind::PermissionDenied),
            ));
        }
        if from == to {
            return Err(AppError::file_operation(
                "copy descriptor to",
                to,
                io::Error::new(io::ErrorKind::InvalidInput, "same file"),
            ));
        }
        let parent_exists = to.parent().is_some_and(|parent| self.is_dir(parent));
        if !parent_exists {
            return Err(Self::not_found("copy descriptor to", to));
        }

        let bytes =
            self.files.borrow().get(from).cloned().ok_or_else(|| Self::not_found("read", from))?;
        let len = bytes.len() as u64;
        self.files.borrow_mut().insert(to.to_path_buf(), bytes);
        self.writes.borrow_mut().push(to.to_path_buf());
        Ok(len)
    }
}
