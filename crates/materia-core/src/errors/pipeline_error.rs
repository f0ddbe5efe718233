//! Run-level errors and non-fatal error collection.

use super::error_code::{self, MateriaErrorCode};
use super::{ConfigError, DocumentError, OutputError, RequestError};

/// Anything that goes wrong in a batch run.
///
/// `Config`, `Output` and `InputMissing` abort. `Document` and `Request`
/// are recorded in a [`PipelineResult`] and the run moves on.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Request {uuid} failed: {source}")]
    Request {
        uuid: String,
        #[source]
        source: RequestError,
    },

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Input folder missing: {path}")]
    InputMissing { path: String },
}

impl MateriaErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Document(e) => e.error_code(),
            Self::Request { source, .. } => source.error_code(),
            Self::Output(e) => e.error_code(),
            Self::InputMissing { .. } => error_code::PIPELINE_ERROR,
        }
    }
}

/// Output of a run together with the per-item failures it tolerated.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    pub data: T,
    pub errors: Vec<PipelineError>,
}

impl<T: Default> PipelineResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: PipelineError) {
        self.errors.push(error);
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
