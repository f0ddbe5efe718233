//! Physical property model: materials, derivation identities, unit tables.

pub mod material;
pub mod units;

pub use material::{Material, TargetProperties};
pub use units::UnitConversion;
