//! Configuration errors.

use super::error_code::{self, MateriaErrorCode};

/// Problems with config files and the lookup tables they point at.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("No readable config or lookup file at {path}")]
    FileNotFound { path: String },

    #[error("Could not parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl MateriaErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
