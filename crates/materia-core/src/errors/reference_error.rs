//! Reference-flow resolution errors.

use std::path::PathBuf;

use super::error_code::{self, MateriaErrorCode};

/// Errors raised while following a process's quantitative reference to its
/// flow document. Inside a filter these count as a non-match.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReferenceError {
    #[error("Process {uuid} has no quantitative reference")]
    MissingQuantitativeReference { uuid: String },

    #[error("Process {uuid} has no exchange with internal id {exchange_id}")]
    MissingExchange { uuid: String, exchange_id: String },

    #[error("Exchange {exchange_id} of process {uuid} does not reference a flow")]
    MissingFlowReference { uuid: String, exchange_id: String },

    #[error("Exchange {exchange_id} of process {uuid} has invalid amount '{value}'")]
    InvalidAmount {
        uuid: String,
        exchange_id: String,
        value: String,
    },

    #[error("Flow {flow_uuid} referenced by process {uuid} not found at {path}")]
    FlowNotFound {
        uuid: String,
        flow_uuid: String,
        path: PathBuf,
    },

    #[error("Flow document {path} could not be parsed: {message}")]
    FlowUnparsable { path: PathBuf, message: String },
}

impl MateriaErrorCode for ReferenceError {
    fn error_code(&self) -> &'static str {
        error_code::REFERENCE_ERROR
    }
}
