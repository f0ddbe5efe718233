//! # materia-epd
//!
//! Generic EPD aggregation engine.
//!
//! Parses ILCD process and flow documents, filters candidate source EPDs
//! with a short-circuiting predicate chain, rescales their materials onto a
//! requested functional unit, averages properties and LCIA impacts across
//! candidates and geographic markets, and writes the results back into
//! template documents without touching any other byte.

#![allow(clippy::module_inception)]

pub mod filters;
pub mod geo;
pub mod ilcd;
pub mod lookup;
pub mod metrics;
pub mod output;
pub mod physics;
pub mod pipeline;
