//! The read-only set of source EPDs shared by every request of a run.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use materia_core::errors::{DocumentError, MateriaErrorCode, PipelineError, PipelineResult};
use materia_core::events::{DocumentSkippedEvent, EventDispatcher, SourcesLoadedEvent};

use crate::ilcd::IlcdProcess;

#[derive(Debug, Default)]
pub struct SourceSet {
    epds: FxHashMap<String, IlcdProcess>,
}

impl SourceSet {
    /// Parse every `*.xml` in `dir`. Unparsable files and later duplicates
    /// of an id are skipped and reported.
    pub fn load(dir: &Path, diagnostics: &EventDispatcher) -> PipelineResult<SourceSet> {
        let mut result = PipelineResult::new(SourceSet::default());
        let mut skipped = 0;

        for path in xml_files(dir) {
            let error = match IlcdProcess::from_path(&path) {
                Ok(process) => match result.data.insert(process) {
                    Ok(()) => continue,
                    Err(duplicate) => DocumentError::InvalidValue {
                        path: duplicate.path,
                        field: "UUID".to_string(),
                        value: format!("duplicate source id {}", duplicate.uuid),
                    },
                },
                Err(e) => e,
            };
            skipped += 1;
            diagnostics.emit_document_skipped(&DocumentSkippedEvent {
                path: error.path().clone(),
                error_code: error.error_code(),
                message: error.to_string(),
            });
            result.add_error(PipelineError::Document(error));
        }

        diagnostics.emit_sources_loaded(&SourcesLoadedEvent {
            loaded: result.data.len(),
            skipped,
        });
        result
    }

    pub fn from_processes(
        processes: impl IntoIterator<Item = IlcdProcess>,
    ) -> (SourceSet, Vec<IlcdProcess>) {
        let mut set = SourceSet::default();
        let duplicates = processes
            .into_iter()
            .filter_map(|p| set.insert(p).err())
            .collect();
        (set, duplicates)
    }

    /// Add a process unless its id is taken; the rejected process is
    /// handed back.
    pub fn insert(&mut self, process: IlcdProcess) -> Result<(), IlcdProcess> {
        if self.epds.contains_key(&process.uuid) {
            return Err(process);
        }
        self.epds.insert(process.uuid.clone(), process);
        Ok(())
    }

    pub fn get(&self, uuid: &str) -> Option<&IlcdProcess> {
        self.epds.get(uuid)
    }

    pub fn len(&self) -> usize {
        self.epds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epds.is_empty()
    }
}

/// `*.xml` files directly in `dir`, sorted by path.
pub(crate) fn xml_files(dir: &Path) -> Vec<PathBuf> {
    let pattern = format!(
        "{}/*.xml",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let mut files: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(paths) => paths.filter_map(Result::ok).filter(|p| p.is_file()).collect(),
        Err(e) => {
            tracing::warn!(path = %dir.display(), error = %e, "Cannot list documents");
            Vec::new()
        }
    };
    files.sort();
    files
}
