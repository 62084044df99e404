//! Error types for the nbe-app layer.

use std::path::PathBuf;

use nbe_format::FormatError;

use crate::dialog::DialogFailure;
use crate::settings::SettingsError;

/// Application error type shared by every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("File format does not exist: {0}")]
    UnknownFormat(PathBuf),

    #[error("Failed to create directory: {path}")]
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for nbe-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<DialogFailure> for AppError {
    fn from(failure: DialogFailure) -> Self {
        match failure {
            DialogFailure::UnknownFormat(path) => AppError::UnknownFormat(path),
            DialogFailure::Format(err) => AppError::Format(err),
            DialogFailure::Directory { path, source } => AppError::Directory { path, source },
        }
    }
}
