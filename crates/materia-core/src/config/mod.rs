//! Configuration system for Materia.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod aggregation_config;
pub mod lookup_config;
pub mod materia_config;
pub mod output_config;

pub use aggregation_config::AggregationConfig;
pub use lookup_config::LookupConfig;
pub use materia_config::{CliOverrides, MateriaConfig};
pub use output_config::OutputConfig;
