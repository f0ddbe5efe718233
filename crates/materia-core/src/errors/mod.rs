//! Error handling for Materia.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod document_error;
pub mod error_code;
pub mod market_error;
pub mod output_error;
pub mod pipeline_error;
pub mod reference_error;
pub mod request_error;
pub mod rescale_error;

pub use config_error::ConfigError;
pub use document_error::DocumentError;
pub use error_code::MateriaErrorCode;
pub use market_error::NoMatchingEpdError;
pub use output_error::OutputError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use reference_error::ReferenceError;
pub use request_error::RequestError;
pub use rescale_error::RescaleError;
