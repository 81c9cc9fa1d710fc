//! Export command: copy discovered descriptors into `<output_dir>/<base_name>/`.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::app::services::discovery::plan_export;
use crate::domain::{AppError, Placement, ProjectLayout};
use crate::ports::ProjectFilesystem;

/// Options for the export command.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Resolved project layout (config file merged with overrides).
    pub layout: ProjectLayout,
    /// Plan the export without creating directories or copying files.
    pub dry_run: bool,
}

/// Result of an export operation.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Workspace directory descriptors were taken from.
    pub workspace: PathBuf,
    /// Absolute output directory.
    pub output_dir: PathBuf,
    /// Descriptors copied (or that would be copied, on a dry run), in copy order.
    pub placements: Vec<Placement>,
    /// Total bytes copied. Always zero on a dry run.
    pub bytes_copied: u64,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl ExportReport {
    /// Number of descriptors handled.
    pub fn count(&self) -> usize {
        self.placements.len()
    }
}

/// Execute the export command.
pub fn execute<F>(fs: &F, root: &Path, options: ExportOptions) -> Result<ExportReport, AppError>
where
    F: ProjectFilesystem,
{
    let plan = plan_export(fs, root, &options.layout)?;

    if options.dry_run {
        return Ok(ExportReport {
            workspace: plan.workspace,
            output_dir: plan.output_dir,
            placements: plan.placements,
            bytes_copied: 0,
            dry_run: true,
        });
    }

    fs.create_dir_all(&plan.output_dir)?;

    let mut bytes_copied = 0;
    for placement in &plan.placements {
        if !fs.is_dir(&placement.destination_dir) {
            fs.create_dir_all(&placement.destination_dir)?;
            debug!(dir = %placement.destination_dir.display(), "created IP directory");
        }

        bytes_copied += fs.copy_file(&placement.descriptor.source, &placement.destination)?;
        debug!(
            from = %placement.descriptor.source.display(),
            to = %placement.destination.display(),
            "copied descriptor"
        );
    }

    info!(count = plan.placements.len(), bytes = bytes_copied, "export finished");

    Ok(ExportReport {
        workspace: plan.workspace,
        output_dir: plan.output_dir,
        placements: plan.placements,
        bytes_copied,
        dry_run: false,
    })
}
