use std::path::{Path, PathBuf};

use crate::ports::ProjectFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem> {
    filesystem: F,
    root: PathBuf,
}

impl<F: ProjectFilesystem> AppContext<F> {
    /// Create a new application context for a project root.
    pub fn new(filesystem: F, root: impl Into<PathBuf>) -> Self {
        Self { filesystem, root: root.into() }
    }

    /// Get a reference to the filesystem port.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Project root all layout paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
