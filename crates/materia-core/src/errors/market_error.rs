//! Market-level candidate search errors.

use super::error_code::{self, MateriaErrorCode};

/// Location escalation exhausted without a single matching candidate.
#[derive(Debug, Clone, thiserror::Error)]
#[error("No EPD matches market {market} after {attempts} attempts; filters tried: {}", chain(.filters))]
pub struct NoMatchingEpdError {
    pub market: String,
    pub attempts: u32,
    /// Description of the location filter used at each attempt.
    pub filters: Vec<String>,
}

impl MateriaErrorCode for NoMatchingEpdError {
    fn error_code(&self) -> &'static str {
        error_code::NO_MATCHING_EPD
    }
}

fn chain(filters: &[String]) -> String {
    filters.join(" -> ")
}
