use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for ipex operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A filesystem operation on a specific path failed.
    #[error("Failed to {action} '{}': {source}", .path.display())]
    FileOperation {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No `*.srcs` workspace directory exists under the workdir.
    #[error("No workspace directory (*{suffix}) found under '{}'", .workdir.display())]
    WorkspaceNotFound { workdir: PathBuf, suffix: String },

    /// More than one `*.srcs` workspace directory exists under the workdir.
    #[error("Multiple workspace directories found: {}", format_paths(.candidates))]
    AmbiguousWorkspace { candidates: Vec<PathBuf> },

    /// Descriptor file name is not valid UTF-8.
    #[error("Descriptor '{}' has a non UTF-8 file name", .path.display())]
    InvalidDescriptorName { path: PathBuf },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Wrap an `io::Error` with the operation and path that produced it.
    pub fn file_operation(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        AppError::FileOperation { action, path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::FileOperation { source, .. } => source.kind(),
            AppError::WorkspaceNotFound { .. } => io::ErrorKind::NotFound,
            AppError::AmbiguousWorkspace { .. }
            | AppError::InvalidDescriptorName { .. }
            | AppError::Configuration(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
        }
    }
}
