//! Indicator label canonicalization.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use materia_core::errors::DocumentError;

/// Built-in labels per canonical indicator name (EN 15804+A2 core set plus
/// the common A1 spellings).
const BUILTIN: &[(&str, &[&str])] = &[
    (
        "GWP-total",
        &[
            "global warming potential",
            "global warming potential - total",
            "global warming potential - total (gwp-total)",
            "climate change",
            "climate change - total",
            "gwp",
            "gwp total",
        ],
    ),
    (
        "GWP-fossil",
        &[
            "global warming potential - fossil",
            "global warming potential - fossil fuels",
            "global warming potential - fossil fuels (gwp-fossil)",
            "climate change - fossil",
            "gwp fossil",
        ],
    ),
    (
        "GWP-biogenic",
        &[
            "global warming potential - biogenic",
            "global warming potential - biogenic (gwp-biogenic)",
            "climate change - biogenic",
            "gwp biogenic",
        ],
    ),
    (
        "GWP-luluc",
        &[
            "global warming potential - land use and land use change",
            "global warming potential - land use and land use change (gwp-luluc)",
            "climate change - land use and land use change",
            "gwp luluc",
        ],
    ),
    (
        "ODP",
        &[
            "depletion potential of the stratospheric ozone layer",
            "depletion potential of the stratospheric ozone layer (odp)",
            "ozone depletion",
            "ozone depletion potential",
        ],
    ),
    (
        "AP",
        &[
            "acidification potential",
            "acidification potential, accumulated exceedance",
            "acidification potential, accumulated exceedance (ap)",
            "acidification potential of land and water",
            "acidification",
        ],
    ),
    (
        "EP",
        &["eutrophication potential", "eutrophication"],
    ),
    (
        "EP-freshwater",
        &[
            "eutrophication potential - freshwater",
            "eutrophication potential - freshwater (ep-freshwater)",
            "eutrophication potential, fraction of nutrients reaching freshwater end compartment",
            "eutrophication, freshwater",
            "eutrophication aquatic freshwater",
        ],
    ),
    (
        "EP-marine",
        &[
            "eutrophication potential - marine",
            "eutrophication potential - marine (ep-marine)",
            "eutrophication potential, fraction of nutrients reaching marine end compartment",
            "eutrophication, marine",
            "eutrophication aquatic marine",
        ],
    ),
    (
        "EP-terrestrial",
        &[
            "eutrophication potential - terrestrial",
            "eutrophication potential - terrestrial (ep-terrestrial)",
            "eutrophication potential, accumulated exceedance",
            "eutrophication, terrestrial",
        ],
    ),
    (
        "POCP",
        &[
            "formation potential of tropospheric ozone",
            "formation potential of tropospheric ozone (pocp)",
            "formation potential of tropospheric ozone photochemical oxidants",
            "photochemical ozone formation",
            "photochemical ozone creation potential",
        ],
    ),
    (
        "ADPE",
        &[
            "abiotic depletion potential for non-fossil resources",
            "abiotic depletion potential for non-fossil resources (adpe)",
            "abiotic depletion potential - non-fossil resources",
            "depletion of abiotic resources - minerals and metals",
            "abiotic depletion potential - elements",
        ],
    ),
    (
        "ADPF",
        &[
            "abiotic depletion potential for fossil resources",
            "abiotic depletion potential for fossil resources (adpf)",
            "abiotic depletion potential - fossil resources",
            "depletion of abiotic resources - fossil fuels",
            "abiotic depletion potential - fossil fuels",
        ],
    ),
    (
        "WDP",
        &[
            "water (user) deprivation potential",
            "water (user) deprivation potential (wdp)",
            "water deprivation potential",
            "water use",
        ],
    ),
];

/// Maps indicator labels to canonical names.
///
/// Lookup is case- and whitespace-insensitive. Labels with no entry keep
/// their normalized text, so both sides of a comparison still agree.
#[derive(Debug, Clone, Default)]
pub struct IndicatorSynonyms {
    lookup: FxHashMap<String, String>,
}

/// Synonym file shape: `{"<canonical>": ["label", ...]}`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct SynonymFile(std::collections::BTreeMap<String, Vec<String>>);

impl IndicatorSynonyms {
    pub fn builtin() -> Self {
        let mut synonyms = Self::default();
        for (canonical, labels) in BUILTIN {
            synonyms.insert(canonical, labels.iter().copied());
        }
        synonyms
    }

    /// Register a canonical name and its labels. Later registrations win.
    pub fn insert<'l>(&mut self, canonical: &str, labels: impl IntoIterator<Item = &'l str>) {
        self.lookup
            .insert(normalize_label(canonical), canonical.to_string());
        for label in labels {
            self.lookup
                .insert(normalize_label(label), canonical.to_string());
        }
    }

    /// Merge a JSON synonym table over the current entries.
    pub fn merge_json(&mut self, json: &str, path: &Path) -> Result<(), DocumentError> {
        let file: SynonymFile =
            serde_json::from_str(json).map_err(|e| DocumentError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        for (canonical, labels) in &file.0 {
            self.insert(canonical, labels.iter().map(String::as_str));
        }
        Ok(())
    }

    pub fn merge_file(&mut self, path: &Path) -> Result<(), DocumentError> {
        let json = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.merge_json(&json, path)
    }

    pub fn canonicalize(&self, label: &str) -> String {
        let normalized = normalize_label(label);
        match self.lookup.get(&normalized) {
            Some(canonical) => canonical.clone(),
            None => normalized,
        }
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

/// Lowercase with runs of whitespace collapsed to one space.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
