//! Request model, candidate state, aggregation orchestrator and batch runner.

pub mod candidate;
pub mod orchestrator;
pub mod request;
pub mod runner;
pub mod source_set;

pub use candidate::Candidate;
pub use orchestrator::{AggregationOutcome, AggregationPipeline};
pub use request::{GenericProcessRequest, RequestStage};
pub use runner::{run, RunPaths, RunSummary};
pub use source_set::SourceSet;
