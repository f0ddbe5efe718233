//! Tracing initialization and shared field names.

pub mod fields;
pub mod setup;

pub use setup::init_tracing;
