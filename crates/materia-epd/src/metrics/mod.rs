//! Averaging engine.

pub mod averaging;

pub use averaging::{average_impacts, average_properties, weighted_average};
