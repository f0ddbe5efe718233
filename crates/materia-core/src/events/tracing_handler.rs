//! Event handler that turns events into structured `tracing` records.

use super::handler::MateriaEventHandler;
use super::types::*;

/// Surfaces pipeline events as log records: fallback activation and market
/// failures are warnings, request failures are errors, completions are info.
/// Field names stay stable so the JSON log can be queried.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventHandler;

impl MateriaEventHandler for TracingEventHandler {
    fn on_run_started(&self, event: &RunStartedEvent) {
        tracing::info!(
            requests_dir = %event.requests_dir.display(),
            sources_dir = %event.sources_dir.display(),
            output_dir = %event.output_dir.display(),
            "Run started"
        );
    }

    fn on_sources_loaded(&self, event: &SourcesLoadedEvent) {
        tracing::info!(
            loaded = event.loaded,
            skipped = event.skipped,
            "Parsed source EPDs"
        );
    }

    fn on_run_complete(&self, event: &RunCompleteEvent) {
        tracing::info!(
            completed = event.completed,
            failed = event.failed,
            skipped = event.skipped,
            duration_ms = event.duration_ms,
            "Run complete"
        );
    }

    fn on_document_skipped(&self, event: &DocumentSkippedEvent) {
        tracing::warn!(
            path = %event.path.display(),
            error_code = event.error_code,
            message = %event.message,
            "Document skipped"
        );
    }

    fn on_indicator_skipped(&self, event: &IndicatorSkippedEvent) {
        tracing::debug!(
            epd_uuid = %event.epd_uuid,
            reason = %event.reason,
            "LCIA indicator block skipped"
        );
    }

    fn on_request_started(&self, event: &RequestStartedEvent) {
        tracing::info!(
            uuid = %event.uuid,
            declared_unit = %event.declared_unit,
            candidate_ids = event.candidate_ids,
            "Processing"
        );
    }

    fn on_request_skipped(&self, event: &RequestSkippedEvent) {
        tracing::debug!(uuid = %event.uuid, reason = %event.reason, "Request skipped");
    }

    fn on_fallback_activated(&self, event: &FallbackActivatedEvent) {
        tracing::warn!(
            uuid = %event.uuid,
            from_unit = %event.from_unit,
            to_unit = %event.to_unit,
            filters = %event.filters,
            "Switched from {}-based to {}-based functional unit",
            event.from_unit,
            event.to_unit
        );
    }

    fn on_market_failed(&self, event: &MarketFailedEvent) {
        tracing::warn!(
            uuid = %event.uuid,
            market = %event.market,
            attempts = event.attempts,
            filters = %event.filters.join(" -> "),
            dropped = event.dropped,
            "No EPD matches market"
        );
    }

    fn on_request_failed(&self, event: &RequestFailedEvent) {
        tracing::error!(
            uuid = %event.uuid,
            error_code = event.error_code,
            message = %event.message,
            "Failed"
        );
    }

    fn on_request_completed(&self, event: &RequestCompletedEvent) {
        tracing::info!(
            uuid = %event.uuid,
            initial_epds = event.initial_epds,
            selected_epds = event.selected_epds,
            markets = event.markets,
            process_path = %event.process_path.display(),
            flow_path = %event.flow_path.display(),
            "Completed"
        );
    }
}
