//! Output errors.

use std::path::PathBuf;

use super::error_code::{self, MateriaErrorCode};

/// Errors raised while writing synthesized documents or copying folders.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OutputError {
    #[error("Cannot create directory {path}: {message}")]
    CreateDir { path: PathBuf, message: String },

    #[error("Cannot write {path}: {message}")]
    Write { path: PathBuf, message: String },

    #[error("Cannot copy {from} to {to}: {message}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },
}

impl MateriaErrorCode for OutputError {
    fn error_code(&self) -> &'static str {
        error_code::OUTPUT_ERROR
    }
}
