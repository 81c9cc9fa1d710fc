//! List command: show discovered descriptors and where export would put them.

use std::path::Path;

use crate::app::services::discovery::plan_export;
use crate::domain::{AppError, Placement, ProjectLayout};
use crate::ports::ProjectFilesystem;

/// Execute the list command. Never writes to the filesystem.
pub fn execute<F>(fs: &F, root: &Path, layout: &ProjectLayout) -> Result<Vec<Placement>, AppError>
where
    F: ProjectFilesystem,
{
    Ok(plan_export(fs, root, layout)?.placements)
}
