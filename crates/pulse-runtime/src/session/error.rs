//! Storage error type.

use pulse_types::ErrorCode;
use std::path::PathBuf;
use thiserror::Error;

/// Failure at the session storage boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be (de)serialized.
    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The storage directory could not be created.
    #[error("cannot create storage directory {}: {source}", path.display())]
    DirectoryCreation {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl StorageError {
    /// Creates a [`StorageError::DirectoryCreation`].
    #[must_use]
    pub fn directory_creation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }
}

impl ErrorCode for StorageError {
    fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "STORAGE_IO",
            Self::Serde(_) => "STORAGE_SERDE",
            Self::DirectoryCreation { .. } => "STORAGE_DIRECTORY_CREATION",
        }
    }

    fn is_recoverable(&self) -> bool {
        // A corrupt snapshot will not deserialize on retry.
        !matches!(self, Self::Serde(_))
    }
}
