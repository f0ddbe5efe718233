//! Document parse errors.

use std::path::PathBuf;

use super::error_code::{self, MateriaErrorCode};

/// Errors raised while reading or parsing one interchange document.
/// Non-fatal to a batch: the affected file is skipped and reported.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentError {
    #[error("Cannot read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Malformed XML in {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Missing {field} in {path}")]
    MissingField { path: PathBuf, field: String },

    #[error("Invalid {field} in {path}: {value}")]
    InvalidValue {
        path: PathBuf,
        field: String,
        value: String,
    },
}

impl DocumentError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. }
            | Self::Malformed { path, .. }
            | Self::MissingField { path, .. }
            | Self::InvalidValue { path, .. } => path,
        }
    }
}

impl MateriaErrorCode for DocumentError {
    fn error_code(&self) -> &'static str {
        error_code::DOCUMENT_ERROR
    }
}
