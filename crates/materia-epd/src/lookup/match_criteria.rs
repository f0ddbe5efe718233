//! Precomputed match criteria keyed by request identifier.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use materia_core::errors::DocumentError;
use materia_core::types::{Property, PropertyMap};

/// Candidate ids plus optional property overrides for the target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchCriteria {
    pub uuids: Vec<String>,
    pub properties: PropertyMap,
}

pub trait MatchCriteriaSource {
    /// Criteria for a request; `Ok(None)` when none exist or the list is empty.
    fn criteria_for(&self, uuid: &str) -> Result<Option<MatchCriteria>, DocumentError>;
}

/// Accepts a bare id list or an object with `uuids` and `properties`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCriteria {
    Ids(Vec<String>),
    Full {
        #[serde(default)]
        uuids: Vec<String>,
        #[serde(default)]
        properties: BTreeMap<String, f64>,
    },
}

/// `<dir>/<uuid>.json` files.
#[derive(Debug, Clone)]
pub struct JsonMatchDirectory {
    dir: PathBuf,
}

impl JsonMatchDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn parse(json: &str, path: &Path) -> Result<Option<MatchCriteria>, DocumentError> {
        let raw: RawCriteria = serde_json::from_str(json).map_err(|e| DocumentError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let (uuids, raw_properties) = match raw {
            RawCriteria::Ids(uuids) => (uuids, BTreeMap::new()),
            RawCriteria::Full { uuids, properties } => (uuids, properties),
        };

        let mut properties = PropertyMap::new();
        for (name, value) in raw_properties {
            match name.parse::<Property>() {
                Ok(property) if value.is_finite() => {
                    properties.insert(property, value);
                }
                _ => tracing::warn!(
                    path = %path.display(),
                    property = %name,
                    "Ignoring unknown property override"
                ),
            }
        }

        let mut seen = std::collections::BTreeSet::new();
        let uuids: Vec<String> = uuids
            .into_iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty() && seen.insert(u.clone()))
            .collect();

        if uuids.is_empty() {
            return Ok(None);
        }
        Ok(Some(MatchCriteria { uuids, properties }))
    }
}

impl MatchCriteriaSource for JsonMatchDirectory {
    fn criteria_for(&self, uuid: &str) -> Result<Option<MatchCriteria>, DocumentError> {
        let path = self.dir.join(format!("{uuid}.json"));
        if !path.is_file() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&path).map_err(|e| DocumentError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&json, &path)
    }
}
