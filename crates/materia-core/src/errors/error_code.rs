//! MateriaErrorCode trait for structured error records.

/// Stable code carried next to the message of every Materia error, used as
/// the `error_code` field of structured log records.
pub trait MateriaErrorCode {
    fn error_code(&self) -> &'static str;

    /// `[CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DOCUMENT_ERROR: &str = "DOCUMENT_ERROR";
pub const REFERENCE_ERROR: &str = "REFERENCE_ERROR";
pub const RESCALE_ERROR: &str = "RESCALE_ERROR";
pub const NO_MATCHING_EPD: &str = "NO_MATCHING_EPD";
pub const NO_CONFORMING_EPD: &str = "NO_CONFORMING_EPD";
pub const MISSING_DECLARED_UNIT: &str = "MISSING_DECLARED_UNIT";
pub const NO_MARKETS: &str = "NO_MARKETS";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
pub const PIPELINE_ERROR: &str = "PIPELINE_ERROR";
