//! Diagnostics event system.
//!
//! The pipeline never logs user-facing outcomes through ambient state; it
//! emits typed events through an [`EventDispatcher`] passed in by the
//! caller. Handlers decide how to surface them.

pub mod dispatcher;
pub mod handler;
pub mod tracing_handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::MateriaEventHandler;
pub use tracing_handler::TracingEventHandler;
pub use types::*;
