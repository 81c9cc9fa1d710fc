//! Project configuration loading from `ipex.toml`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::config::{parse_config_content, validate_layout};
use crate::domain::layout::config_file;
use crate::domain::{AppError, ProjectLayout};
use crate::ports::ProjectFilesystem;

/// Values supplied at invocation time that take precedence over `ipex.toml`.
#[derive(Debug, Clone, Default)]
pub struct LayoutOverrides {
    pub output_dir: Option<PathBuf>,
}

/// Load `<root>/ipex.toml` (defaults when absent) and apply overrides.
pub fn load_layout<F: ProjectFilesystem>(
    fs: &F,
    root: &Path,
    overrides: &LayoutOverrides,
) -> Result<ProjectLayout, AppError> {
    let path = config_file(root);
    let mut layout = if fs.exists(&path) {
        debug!(path = %path.display(), "loading project config");
        parse_config_content(&fs.read_to_string(&path)?)?
    } else {
        ProjectLayout::default()
    };

    if let Some(output_dir) = &overrides.output_dir {
        layout.output_dir = output_dir.clone();
        validate_layout(&layout)?;
    }

    Ok(layout)
}
