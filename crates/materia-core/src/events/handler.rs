//! MateriaEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling Materia pipeline events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about.
pub trait MateriaEventHandler: Send + Sync {
    // ---- Run lifecycle ----
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_sources_loaded(&self, _event: &SourcesLoadedEvent) {}
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}

    // ---- Documents ----
    fn on_document_skipped(&self, _event: &DocumentSkippedEvent) {}
    fn on_indicator_skipped(&self, _event: &IndicatorSkippedEvent) {}

    // ---- Requests ----
    fn on_request_started(&self, _event: &RequestStartedEvent) {}
    fn on_request_skipped(&self, _event: &RequestSkippedEvent) {}
    fn on_fallback_activated(&self, _event: &FallbackActivatedEvent) {}
    fn on_market_failed(&self, _event: &MarketFailedEvent) {}
    fn on_request_failed(&self, _event: &RequestFailedEvent) {}
    fn on_request_completed(&self, _event: &RequestCompletedEvent) {}
}
