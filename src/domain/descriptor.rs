//! IP core descriptor model and the placement rule for exported copies.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Leading component of a file name, up to (excluding) its first `.`.
///
/// `clk_wiz_0.xci` -> `clk_wiz_0`, `fifo.v2.xci` -> `fifo`.
pub fn base_name(file_name: &str) -> &str {
    file_name.split_once('.').map_or(file_name, |(head, _)| head)
}

/// A descriptor file discovered inside the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub source: PathBuf,
    pub file_name: String,
    pub base_name: String,
}

impl Descriptor {
    /// Build a descriptor from its source path.
    ///
    /// Fails when the file name is not valid UTF-8. A dot-leading name such as
    /// `.backup.xci` has an empty base name and lands directly in the output dir.
    pub fn from_path(source: impl Into<PathBuf>) -> Result<Self, AppError> {
        let source = source.into();
        let file_name = match source.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_string(),
            None => return Err(AppError::InvalidDescriptorName { path: source }),
        };

        let base_name = base_name(&file_name).to_string();

        Ok(Self { source, file_name, base_name })
    }

    /// Resolve where this descriptor lands under `output_dir`.
    pub fn place(self, output_dir: &Path) -> Placement {
        let destination_dir = output_dir.join(&self.base_name);
        let destination = destination_dir.join(&self.file_name);
        Placement { descriptor: self, destination_dir, destination }
    }
}

/// A descriptor paired with its export destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub descriptor: Descriptor,
    /// `output_dir/<base_name>`
    pub destination_dir: PathBuf,
    /// `output_dir/<base_name>/<file_name>`
    pub destination: PathBuf,
}
