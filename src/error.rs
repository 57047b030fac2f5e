// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Reading the file: {} ({source})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed CSV at line {line}")]
    MalformedRecord { line: usize },

    #[error("Invalid salary format at line {line}: '{value}'")]
    InvalidSalary { line: usize, value: String },

    #[error("No CEO found in data")]
    NoRoot,

    #[error("Multiple CEOs found in data: {}", ids.join(", "))]
    MultipleRoots { ids: Vec<String> },

    #[error("Invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    /// Wraps an I/O failure, promoting `NotFound` to [`RosterError::FileNotFound`].
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { source, path }
        }
    }

    /// True for failures caused by the roster contents rather than the environment.
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. } | Self::InvalidSalary { .. }
        )
    }

    /// True for violations of the single-root invariant.
    #[must_use]
    pub fn is_structure_error(&self) -> bool {
        matches!(self, Self::NoRoot | Self::MultipleRoots { .. })
    }
}
