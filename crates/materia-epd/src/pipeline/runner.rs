//! Batch runner: one run over a request folder and a source EPD folder.

use std::path::{Path, PathBuf};
use std::time::Instant;

use materia_core::config::MateriaConfig;
use materia_core::constants::{FLOWS_DIR, PROCESSES_DIR};
use materia_core::errors::{MateriaErrorCode, PipelineError, PipelineResult, RequestError};
use materia_core::events::{
    DocumentSkippedEvent, EventDispatcher, RequestCompletedEvent, RequestFailedEvent,
    RequestSkippedEvent, RequestStartedEvent, RunCompleteEvent, RunStartedEvent,
};

use super::orchestrator::AggregationPipeline;
use super::request::{GenericProcessRequest, RequestStage};
use super::source_set::{xml_files, SourceSet};
use crate::ilcd::{IlcdProcess, IndicatorSynonyms};
use crate::lookup::{JsonMatchDirectory, MarketShareSource, MarketShareTable, MatchCriteriaSource};
use crate::output::{copy_except_folders, write_document};

/// Filesystem locations of one run.
#[derive(Debug, Clone)]
pub struct RunPaths {
    /// Generic dataset: `processes/`, `flows/` and template folders.
    pub input: PathBuf,
    /// Source EPD dataset: `processes/` and `flows/`.
    pub epd_folder: PathBuf,
    pub output: PathBuf,
    /// Relative lookup paths resolve against this directory.
    pub config_root: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub sources_loaded: usize,
    pub completed: Vec<String>,
    pub failed: Vec<String>,
    pub skipped: Vec<String>,
    pub written: Vec<PathBuf>,
}

/// Documents written for one request.
struct Written {
    process_path: PathBuf,
    flow_path: PathBuf,
    initial_epds: usize,
    selected_epds: usize,
    markets: usize,
}

/// Run the whole batch.
///
/// Only missing inputs, unreadable lookup tables and output failures
/// outside a request abort the run; document and request failures are
/// reported and collected in the result.
pub fn run(
    config: &MateriaConfig,
    paths: &RunPaths,
    diagnostics: &EventDispatcher,
) -> Result<PipelineResult<RunSummary>, PipelineError> {
    let started = Instant::now();
    let requests_dir = require_dir(&paths.input.join(PROCESSES_DIR))?;
    let sources_dir = require_dir(&paths.epd_folder.join(PROCESSES_DIR))?;

    diagnostics.emit_run_started(&RunStartedEvent {
        requests_dir: requests_dir.clone(),
        sources_dir: sources_dir.clone(),
        output_dir: paths.output.clone(),
    });

    copy_except_folders(
        &paths.input,
        &paths.output,
        &config.output.effective_excluded_folders(),
    )?;

    let root = &paths.config_root;
    let mut synonyms = IndicatorSynonyms::builtin();
    if let Some(path) = config.lookup.effective_indicator_synonyms_file(root) {
        synonyms.merge_file(&path)?;
    }
    let shares_path = config.lookup.effective_market_shares_file(root);
    let shares = if shares_path.is_file() {
        MarketShareTable::load(&shares_path)?
    } else {
        tracing::warn!(
            path = %shares_path.display(),
            "No market-share table; every request uses its own location"
        );
        MarketShareTable::default()
    };
    let criteria = JsonMatchDirectory::new(config.lookup.effective_matches_dir(root));

    let loaded = SourceSet::load(&sources_dir, diagnostics);
    let sources = loaded.data;
    let mut result = PipelineResult::new(RunSummary {
        sources_loaded: sources.len(),
        ..Default::default()
    });
    result.errors.extend(loaded.errors);

    let pipeline = AggregationPipeline::new(&sources, &config.aggregation, &synonyms, diagnostics);

    for path in xml_files(&requests_dir) {
        let process = match IlcdProcess::from_path(&path) {
            Ok(process) => process,
            Err(e) => {
                diagnostics.emit_document_skipped(&DocumentSkippedEvent {
                    path: path.clone(),
                    error_code: e.error_code(),
                    message: e.to_string(),
                });
                result.add_error(e.into());
                continue;
            }
        };

        let uuid = process.uuid.clone();
        let mut request = GenericProcessRequest::new(process);
        let outcome = process_request(
            &pipeline,
            &mut request,
            &criteria,
            &shares,
            &synonyms,
            &paths.output,
            diagnostics,
        );

        match outcome {
            Ok(Some(written)) => {
                diagnostics.emit_request_completed(&RequestCompletedEvent {
                    uuid: uuid.clone(),
                    initial_epds: written.initial_epds,
                    selected_epds: written.selected_epds,
                    markets: written.markets,
                    process_path: written.process_path.clone(),
                    flow_path: written.flow_path.clone(),
                });
                result.data.written.push(written.process_path);
                result.data.written.push(written.flow_path);
                result.data.completed.push(uuid);
            }
            Ok(None) => result.data.skipped.push(uuid),
            Err(e) => {
                request.stage = RequestStage::Failed;
                diagnostics.emit_request_failed(&RequestFailedEvent {
                    uuid: uuid.clone(),
                    error_code: e.error_code(),
                    message: e.to_string(),
                });
                result.data.failed.push(uuid.clone());
                result.add_error(PipelineError::Request { uuid, source: e });
            }
        }
    }

    diagnostics.emit_run_complete(&RunCompleteEvent {
        completed: result.data.completed.len(),
        failed: result.data.failed.len(),
        skipped: result.data.skipped.len(),
        duration_ms: started.elapsed().as_millis() as u64,
    });
    Ok(result)
}

fn process_request(
    pipeline: &AggregationPipeline<'_>,
    request: &mut GenericProcessRequest,
    criteria: &dyn MatchCriteriaSource,
    shares: &dyn MarketShareSource,
    synonyms: &IndicatorSynonyms,
    output: &Path,
    diagnostics: &EventDispatcher,
) -> Result<Option<Written>, RequestError> {
    request.extract(criteria, shares)?;

    let Some(candidate_ids) = request.criteria.as_ref().map(|c| c.uuids.len()) else {
        diagnostics.emit_request_skipped(&RequestSkippedEvent {
            uuid: request.uuid().to_string(),
            reason: "no match criteria".to_string(),
        });
        return Ok(None);
    };

    diagnostics.emit_request_started(&RequestStartedEvent {
        uuid: request.uuid().to_string(),
        declared_unit: request
            .declared_unit
            .map(|u| u.to_string())
            .unwrap_or_default(),
        candidate_ids,
    });

    let outcome = pipeline.aggregate(request)?;

    let flow = request
        .flow
        .as_ref()
        .ok_or_else(|| RequestError::MissingDeclaredUnit {
            uuid: request.uuid().to_string(),
        })?;
    let process_xml = request.process.synthesize(&outcome.impacts, synonyms);
    let flow_xml = flow.synthesize(&outcome.properties, request.basis());

    let process_path = write_document(output, PROCESSES_DIR, request.uuid(), &process_xml)?;
    let flow_path = write_document(output, FLOWS_DIR, &flow.uuid, &flow_xml)?;
    request.stage = RequestStage::Done;

    Ok(Some(Written {
        process_path,
        flow_path,
        initial_epds: outcome.initial_epds,
        selected_epds: outcome.selected.len(),
        markets: outcome.market_pools.len(),
    }))
}

fn require_dir(path: &Path) -> Result<PathBuf, PipelineError> {
    if path.is_dir() {
        Ok(path.to_path_buf())
    } else {
        Err(PipelineError::InputMissing {
            path: path.display().to_string(),
        })
    }
}
