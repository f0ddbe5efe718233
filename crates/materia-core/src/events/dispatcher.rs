//! Synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::MateriaEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// This is the diagnostics context threaded through pipeline operations.
/// Each run (or test) owns its own dispatcher, so runs never share
/// diagnostic state.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn MateriaEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Create a dispatcher with a single handler registered.
    pub fn with_handler(handler: Arc<dyn MateriaEventHandler>) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(handler);
        dispatcher
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn MateriaEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn MateriaEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::error!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    // ---- Run lifecycle ----
    pub fn emit_run_started(&self, event: &RunStartedEvent) {
        self.emit(|h| h.on_run_started(event));
    }

    pub fn emit_sources_loaded(&self, event: &SourcesLoadedEvent) {
        self.emit(|h| h.on_sources_loaded(event));
    }

    pub fn emit_run_complete(&self, event: &RunCompleteEvent) {
        self.emit(|h| h.on_run_complete(event));
    }

    // ---- Documents ----
    pub fn emit_document_skipped(&self, event: &DocumentSkippedEvent) {
        self.emit(|h| h.on_document_skipped(event));
    }

    pub fn emit_indicator_skipped(&self, event: &IndicatorSkippedEvent) {
        self.emit(|h| h.on_indicator_skipped(event));
    }

    // ---- Requests ----
    pub fn emit_request_started(&self, event: &RequestStartedEvent) {
        self.emit(|h| h.on_request_started(event));
    }

    pub fn emit_request_skipped(&self, event: &RequestSkippedEvent) {
        self.emit(|h| h.on_request_skipped(event));
    }

    pub fn emit_fallback_activated(&self, event: &FallbackActivatedEvent) {
        self.emit(|h| h.on_fallback_activated(event));
    }

    pub fn emit_market_failed(&self, event: &MarketFailedEvent) {
        self.emit(|h| h.on_market_failed(event));
    }

    pub fn emit_request_failed(&self, event: &RequestFailedEvent) {
        self.emit(|h| h.on_request_failed(event));
    }

    pub fn emit_request_completed(&self, event: &RequestCompletedEvent) {
        self.emit(|h| h.on_request_completed(event));
    }
}
