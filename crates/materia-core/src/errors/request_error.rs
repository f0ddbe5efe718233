//! Request-level aggregation errors.

use super::error_code::{self, MateriaErrorCode};
use super::{DocumentError, NoMatchingEpdError, OutputError, ReferenceError, RescaleError};

/// Errors fatal to one generic-process request. The batch continues.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestError {
    #[error("Extraction failed: {0}")]
    Extraction(#[from] DocumentError),

    #[error("Reference flow unresolved: {0}")]
    Reference(#[from] ReferenceError),

    #[error("Request {uuid} declares no recognizable functional unit")]
    MissingDeclaredUnit { uuid: String },

    #[error("No candidate of request {uuid} passes filters {filters}")]
    NoConformingCandidates { uuid: String, filters: String },

    #[error("Averaged material cannot be rescaled: {0}")]
    Rescale(#[from] RescaleError),

    #[error("Market search failed: {0}")]
    NoMatchingEpd(#[from] NoMatchingEpdError),

    #[error("No market of request {uuid} produced impacts")]
    NoMarkets { uuid: String },

    #[error("Output failed: {0}")]
    Output(#[from] OutputError),
}

impl MateriaErrorCode for RequestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Extraction(e) => e.error_code(),
            Self::Reference(e) => e.error_code(),
            Self::MissingDeclaredUnit { .. } => error_code::MISSING_DECLARED_UNIT,
            Self::NoConformingCandidates { .. } => error_code::NO_CONFORMING_EPD,
            Self::Rescale(e) => e.error_code(),
            Self::NoMatchingEpd(e) => e.error_code(),
            Self::NoMarkets { .. } => error_code::NO_MARKETS,
            Self::Output(e) => e.error_code(),
        }
    }
}
