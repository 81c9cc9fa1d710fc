//! Export command implementation.

use super::TargetArgs;
use crate::app::api::{self, ExportOptions};
use crate::domain::AppError;

pub(super) fn run_export(target: &TargetArgs, dry_run: bool) -> Result<(), AppError> {
    let root = target.project_root()?;
    let layout = api::resolve_layout(&root, target.out.clone())?;
    let report = api::export_with(&root, ExportOptions { layout, dry_run })?;

    if report.dry_run {
        println!(
            "Dry run: {} IP descriptor(s) from {}",
            report.count(),
            report.workspace.display()
        );
        for placement in &report.placements {
            println!(
                "  {} -> {}",
                placement.descriptor.source.display(),
                placement.destination.display()
            );
        }
        return Ok(());
    }

    println!("✅ Exported {} IP descriptor(s) to {}", report.count(), report.output_dir.display());
    Ok(())
}
