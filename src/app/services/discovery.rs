//! Workspace location, descriptor discovery and export planning.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::{AppError, Descriptor, Placement, ProjectLayout};
use crate::ports::ProjectFilesystem;

/// Everything an export run will do, computed without touching the output tree.
#[derive(Debug, Clone)]
pub struct ExportPlan {
    pub workspace: PathBuf,
    pub output_dir: PathBuf,
    pub placements: Vec<Placement>,
}

/// Find the single `*.srcs` directory under `<root>/<workdir>`.
pub fn locate_workspace<F: ProjectFilesystem>(
    fs: &F,
    root: &Path,
    layout: &ProjectLayout,
) -> Result<PathBuf, AppError> {
    let workdir = layout.workdir(root);
    let not_found = || AppError::WorkspaceNotFound {
        workdir: workdir.clone(),
        suffix: layout.workspace_suffix.clone(),
    };

    if !fs.is_dir(&workdir) {
        return Err(not_found());
    }

    let mut candidates: Vec<PathBuf> = fs
        .list_dir(&workdir)?
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| layout.is_workspace_name(name))
        })
        .filter(|path| fs.is_dir(path))
        .collect();

    match candidates.len() {
        0 => Err(not_found()),
        1 => Ok(candidates.remove(0)),
        _ => {
            candidates.sort();
            Err(AppError::AmbiguousWorkspace { candidates })
        }
    }
}

/// Recursively collect descriptor files under the workspace.
pub fn discover_descriptors<F: ProjectFilesystem>(
    fs: &F,
    workspace: &Path,
    layout: &ProjectLayout,
) -> Result<Vec<Descriptor>, AppError> {
    let mut descriptors = Vec::new();
    for path in fs.walk_files(workspace)? {
        let is_descriptor = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| layout.is_descriptor_name(name));
        if !is_descriptor {
            continue;
        }

        let descriptor = Descriptor::from_path(path)?;
        debug!(
            source = %descriptor.source.display(),
            base_name = %descriptor.base_name,
            "discovered descriptor"
        );
        descriptors.push(descriptor);
    }
    Ok(descriptors)
}

/// Locate, discover and place every descriptor for `root`.
pub fn plan_export<F: ProjectFilesystem>(
    fs: &F,
    root: &Path,
    layout: &ProjectLayout,
) -> Result<ExportPlan, AppError> {
    let workspace = locate_workspace(fs, root, layout)?;
    info!(workspace = %workspace.display(), "using workspace");

    let output_dir = layout.output_dir(root);
    let placements: Vec<Placement> = discover_descriptors(fs, &workspace, layout)?
        .into_iter()
        .map(|descriptor| descriptor.place(&output_dir))
        .collect();

    warn_on_collisions(&placements);

    Ok(ExportPlan { workspace, output_dir, placements })
}

/// Later placements overwrite earlier ones with the same destination.
fn warn_on_collisions(placements: &[Placement]) {
    let mut seen: HashMap<&Path, &Path> = HashMap::new();
    for placement in placements {
        let source = placement.descriptor.source.as_path();
        if let Some(previous) = seen.insert(placement.destination.as_path(), source) {
            warn!(
                destination = %placement.destination.display(),
                overwritten = %previous.display(),
                by = %source.display(),
                "descriptor destination collision"
            );
        }
    }
}
