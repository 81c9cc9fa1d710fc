use std::path::{Path, PathBuf};

/// Directory under the project root holding tool-generated sources.
pub const WORKDIR: &str = "workdir";

/// Name suffix identifying the workspace directory inside the workdir.
pub const WORKSPACE_SUFFIX: &str = ".srcs";

/// Extension of IP core descriptor files.
pub const DESCRIPTOR_EXTENSION: &str = "xci";

/// Default output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "src/ip";

/// Project configuration file name.
pub const CONFIG_FILE: &str = "ipex.toml";

/// Resolved layout of a project: where to look for descriptors and where to put them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub output_dir: PathBuf,
    pub workdir: PathBuf,
    pub workspace_suffix: String,
    pub extension: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            workdir: PathBuf::from(WORKDIR),
            workspace_suffix: WORKSPACE_SUFFIX.to_string(),
            extension: DESCRIPTOR_EXTENSION.to_string(),
        }
    }
}

impl ProjectLayout {
    /// `<root>/workdir`
    pub fn workdir(&self, root: &Path) -> PathBuf {
        root.join(&self.workdir)
    }

    /// `<root>/src/ip`
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }

    /// Whether a directory name marks a workspace (`foo.srcs`).
    pub fn is_workspace_name(&self, name: &str) -> bool {
        name.ends_with(self.workspace_suffix.as_str())
    }

    /// Whether a file name marks a descriptor (`foo.xci`).
    pub fn is_descriptor_name(&self, name: &str) -> bool {
        name.strip_suffix(self.extension.as_str()).is_some_and(|stem| stem.ends_with('.'))
    }
}

/// `<root>/ipex.toml`
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
