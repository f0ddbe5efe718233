//! Geography codes and the location escalation hierarchy.

pub mod escalation;
pub mod locations;

pub use escalation::{escalate, filter_by_location};
pub use locations::{is_known, normalize_location, region_of};
