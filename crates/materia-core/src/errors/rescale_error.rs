//! Material rescale errors.

use super::error_code::{self, MateriaErrorCode};
use crate::types::Property;

/// Errors raised when a material cannot be expressed on a requested basis.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RescaleError {
    #[error("Cannot derive {property} from known properties [{}]", known_list(.known))]
    Underivable {
        property: Property,
        known: Vec<Property>,
    },

    #[error("Cannot rescale on {property}: current value {value} is not a positive finite number")]
    InvalidBasis { property: Property, value: f64 },
}

fn known_list(known: &[Property]) -> String {
    known
        .iter()
        .map(Property::name)
        .collect::<Vec<_>>()
        .join(", ")
}

impl MateriaErrorCode for RescaleError {
    fn error_code(&self) -> &'static str {
        error_code::RESCALE_ERROR
    }
}
