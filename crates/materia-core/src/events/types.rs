//! Event payload types.

use std::path::PathBuf;

/// Payload for `on_run_started`.
#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub requests_dir: PathBuf,
    pub sources_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// Payload for `on_sources_loaded`.
#[derive(Debug, Clone)]
pub struct SourcesLoadedEvent {
    pub loaded: usize,
    pub skipped: usize,
}

/// Payload for `on_document_skipped`.
#[derive(Debug, Clone)]
pub struct DocumentSkippedEvent {
    pub path: PathBuf,
    pub error_code: &'static str,
    pub message: String,
}

/// Payload for `on_indicator_skipped`.
#[derive(Debug, Clone)]
pub struct IndicatorSkippedEvent {
    pub epd_uuid: String,
    pub reason: String,
}

/// Payload for `on_request_started`.
#[derive(Debug, Clone)]
pub struct RequestStartedEvent {
    pub uuid: String,
    pub declared_unit: String,
    pub candidate_ids: usize,
}

/// Payload for `on_request_skipped`.
#[derive(Debug, Clone)]
pub struct RequestSkippedEvent {
    pub uuid: String,
    pub reason: String,
}

/// Payload for `on_fallback_activated`.
#[derive(Debug, Clone)]
pub struct FallbackActivatedEvent {
    pub uuid: String,
    pub from_unit: String,
    pub to_unit: String,
    pub filters: String,
}

/// Payload for `on_market_failed`.
#[derive(Debug, Clone)]
pub struct MarketFailedEvent {
    pub uuid: String,
    pub market: String,
    pub attempts: u32,
    pub filters: Vec<String>,
    pub dropped: bool,
}

/// Payload for `on_request_failed`.
#[derive(Debug, Clone)]
pub struct RequestFailedEvent {
    pub uuid: String,
    pub error_code: &'static str,
    pub message: String,
}

/// Payload for `on_request_completed`.
#[derive(Debug, Clone)]
pub struct RequestCompletedEvent {
    pub uuid: String,
    pub initial_epds: usize,
    pub selected_epds: usize,
    pub markets: usize,
    pub process_path: PathBuf,
    pub flow_path: PathBuf,
}

/// Payload for `on_run_complete`.
#[derive(Debug, Clone)]
pub struct RunCompleteEvent {
    pub completed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
}
