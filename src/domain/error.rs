use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for dgraph-helper operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Settings or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Host operating system is not supported.
    #[error("Currently dgraph-helper can only be used on Linux systems (found '{0}')")]
    UnsupportedOs(String),

    /// The service directory is not writable by the current user.
    #[error("Invalid permissions on {} (try running as root or use sudo)", .0.display())]
    InsufficientPermissions(PathBuf),

    /// The terminal prompt could not be shown or read.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// The operator interrupted a prompt.
    #[error("Installation cancelled")]
    Cancelled,

    /// An external command could not be spawned or exited non-zero.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// YAML serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Service unit template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::Yaml(_) | AppError::Template(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::UnsupportedOs(_) => io::ErrorKind::Unsupported,
            AppError::InsufficientPermissions(_) => io::ErrorKind::PermissionDenied,
            AppError::Cancelled => io::ErrorKind::Interrupted,
            AppError::Prompt(_) | AppError::CommandFailed { .. } => io::ErrorKind::Other,
        }
    }
}
