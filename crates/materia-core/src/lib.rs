//! # materia-core
//!
//! Shared vocabulary for the Materia generic EPD engine: canonical material
//! properties, declared units and life-cycle modules, one error enum per
//! subsystem, layered TOML configuration, the diagnostics event system,
//! tracing setup, and defaults.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
