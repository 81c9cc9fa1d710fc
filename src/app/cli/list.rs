//! List command implementation.

use super::TargetArgs;
use crate::app::api;
use crate::domain::AppError;

pub(super) fn run_list(target: &TargetArgs) -> Result<(), AppError> {
    let root = target.project_root()?;
    let layout = api::resolve_layout(&root, target.out.clone())?;
    let placements = api::list(&root, &layout)?;

    if placements.is_empty() {
        println!("No IP descriptors found");
        return Ok(());
    }

    for placement in &placements {
        println!(
            "{}  {} -> {}",
            placement.descriptor.base_name,
            placement.descriptor.source.display(),
            placement.destination.display()
        );
    }
    Ok(())
}
