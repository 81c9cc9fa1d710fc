//! Pure parse/validate for project configuration (`ipex.toml`).

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{AppError, ProjectLayout};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigDto {
    pub export: Option<ExportConfigDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfigDto {
    pub output_dir: Option<PathBuf>,
    pub workdir: Option<PathBuf>,
    pub workspace_suffix: Option<String>,
    pub extension: Option<String>,
}

impl From<ConfigDto> for ProjectLayout {
    fn from(dto: ConfigDto) -> Self {
        let defaults = ProjectLayout::default();
        let Some(export) = dto.export else {
            return defaults;
        };

        ProjectLayout {
            output_dir: export.output_dir.unwrap_or(defaults.output_dir),
            workdir: export.workdir.unwrap_or(defaults.workdir),
            workspace_suffix: export.workspace_suffix.unwrap_or(defaults.workspace_suffix),
            extension: export.extension.unwrap_or(defaults.extension),
        }
    }
}

/// Parse and validate project configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ProjectLayout, AppError> {
    let dto: ConfigDto = toml::from_str(content)?;
    let layout = ProjectLayout::from(dto);
    validate_layout(&layout)?;
    Ok(layout)
}

/// Reject layouts that would escape the project root or match nothing sensible.
///
/// An empty `output_dir` is the project root itself.
pub fn validate_layout(layout: &ProjectLayout) -> Result<(), AppError> {
    if layout.output_dir.is_absolute() {
        return Err(AppError::config_error(format!(
            "export.output_dir must be relative to the project root: {}",
            layout.output_dir.display()
        )));
    }
    if layout.workdir.is_absolute() {
        return Err(AppError::config_error(format!(
            "export.workdir must be relative to the project root: {}",
            layout.workdir.display()
        )));
    }
    if layout.workspace_suffix.is_empty() {
        return Err(AppError::config_error("export.workspace_suffix must not be empty"));
    }
    if layout.extension.is_empty() || layout.extension.contains('.') {
        return Err(AppError::config_error(format!(
            "export.extension must be a bare extension without '.': '{}'",
            layout.extension
        )));
    }
    Ok(())
}
