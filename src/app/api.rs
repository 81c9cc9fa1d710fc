//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation,
//! configuration loading and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::FilesystemProject;
use crate::app::{
    AppContext,
    commands::{export, list},
    config::{LayoutOverrides, load_layout},
};

pub use crate::app::commands::export::{ExportOptions, ExportReport};
pub use crate::domain::{AppError, Descriptor, Placement, ProjectLayout};

/// Create an `AppContext` for a given project root.
fn create_context(root: impl Into<PathBuf>) -> AppContext<FilesystemProject> {
    AppContext::new(FilesystemProject::new(), root)
}

/// Export descriptors from `<project_root>/workdir/*.srcs` into
/// `<project_root>/<output_subdir>/<base_name>/`.
///
/// The built-in layout is used; `ipex.toml` is not consulted.
pub fn export(
    project_root: &Path,
    output_subdir: impl AsRef<Path>,
) -> Result<ExportReport, AppError> {
    let layout = ProjectLayout {
        output_dir: output_subdir.as_ref().to_path_buf(),
        ..ProjectLayout::default()
    };
    crate::domain::config::validate_layout(&layout)?;
    export_with(project_root, ExportOptions { layout, dry_run: false })
}

/// Export descriptors with an explicit layout and dry-run flag.
pub fn export_with(project_root: &Path, options: ExportOptions) -> Result<ExportReport, AppError> {
    let ctx = create_context(project_root);
    export::execute(ctx.filesystem(), ctx.root(), options)
}

/// Resolve the project layout from `ipex.toml` and invocation-time overrides.
pub fn resolve_layout(
    project_root: &Path,
    output_dir: Option<PathBuf>,
) -> Result<ProjectLayout, AppError> {
    let ctx = create_context(project_root);
    load_layout(ctx.filesystem(), ctx.root(), &LayoutOverrides { output_dir })
}

/// List discovered descriptors and their destinations without writing anything.
pub fn list(project_root: &Path, layout: &ProjectLayout) -> Result<Vec<Placement>, AppError> {
    let ctx = create_context(project_root);
    list::execute(ctx.filesystem(), ctx.root(), layout)
}
