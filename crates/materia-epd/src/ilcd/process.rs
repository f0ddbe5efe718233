//! ILCD process documents: source EPDs and generic-process templates.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use materia_core::constants;
use materia_core::errors::{DocumentError, ReferenceError};
use materia_core::types::{ImpactMap, ModuleValues};

use super::flow::IlcdFlow;
use super::lcia::{self, LciaExtraction};
use super::locators as loc;
use super::patch::XmlPatch;
use super::synonyms::IndicatorSynonyms;
use super::xml::XmlDocument;
use super::format_value;
use crate::geo::normalize_location;

#[derive(Debug, Clone)]
pub struct IlcdProcess {
    pub uuid: String,
    /// Normalized location code; `GLO` when the document has none.
    pub location: String,
    pub path: PathBuf,
    document: XmlDocument,
}

impl IlcdProcess {
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let source = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(source, path)
    }

    pub fn parse(source: String, path: impl Into<PathBuf>) -> Result<Self, DocumentError> {
        let path = path.into();
        let document = XmlDocument::parse(source).map_err(|e| DocumentError::Malformed {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let root = document.root();
        let uuid = document
            .find_descendant(root, loc::UUID)
            .map(|id| document.text(id).to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DocumentError::MissingField {
                path: path.clone(),
                field: loc::UUID.to_string(),
            })?;
        let location = document
            .find_descendant(root, loc::LOCATION)
            .and_then(|id| document.attribute(id, loc::LOCATION_ATTR))
            .map(normalize_location)
            .unwrap_or_else(|| constants::GLOBAL_LOCATION.to_string());

        Ok(Self {
            uuid,
            location,
            path,
            document,
        })
    }

    pub fn document(&self) -> &XmlDocument {
        &self.document
    }

    /// Follow the quantitative reference to the reference flow and parse it,
    /// scaled by the reference exchange's amount.
    pub fn resolve_reference_flow(&self) -> Result<IlcdFlow, ReferenceError> {
        let doc = &self.document;
        let root = doc.root();

        let exchange_id = doc
            .find_path(root, loc::REFERENCE_FLOW)
            .map(|id| doc.text(id))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ReferenceError::MissingQuantitativeReference {
                uuid: self.uuid.clone(),
            })?;

        let exchange = doc
            .find_all(root, loc::EXCHANGE)
            .find(|&e| doc.attribute(e, loc::INTERNAL_ID_ATTR).map(str::trim) == Some(exchange_id))
            .ok_or_else(|| ReferenceError::MissingExchange {
                uuid: self.uuid.clone(),
                exchange_id: exchange_id.to_string(),
            })?;

        let missing_flow = || ReferenceError::MissingFlowReference {
            uuid: self.uuid.clone(),
            exchange_id: exchange_id.to_string(),
        };
        let flow_ref = doc.child(exchange, loc::FLOW_REFERENCE).ok_or_else(missing_flow)?;
        let flow_uuid = doc
            .attribute(flow_ref, loc::REF_OBJECT_ID_ATTR)
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(missing_flow)?;

        let amount = match doc
            .child(exchange, loc::MEAN_AMOUNT)
            .or_else(|| doc.child(exchange, loc::RESULTING_AMOUNT))
        {
            Some(id) => {
                let text = doc.text(id);
                text.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ReferenceError::InvalidAmount {
                        uuid: self.uuid.clone(),
                        exchange_id: exchange_id.to_string(),
                        value: text.to_string(),
                    })?
            }
            None => 1.0,
        };

        let path = self.locate_flow(flow_uuid, doc.attribute(flow_ref, loc::URI_ATTR))?;
        IlcdFlow::from_path(&path, amount).map_err(|e| ReferenceError::FlowUnparsable {
            path,
            message: e.to_string(),
        })
    }

    /// `<dataset>/flows/<uuid>.xml`, else the reference's `uri` relative to
    /// this document.
    fn locate_flow(&self, flow_uuid: &str, uri: Option<&str>) -> Result<PathBuf, ReferenceError> {
        let process_dir = self.path.parent().unwrap_or(Path::new("."));
        let dataset_dir = process_dir.parent().unwrap_or(Path::new("."));
        let primary = dataset_dir
            .join(constants::FLOWS_DIR)
            .join(format!("{flow_uuid}.xml"));
        if primary.is_file() {
            return Ok(primary);
        }
        if let Some(uri) = uri.map(str::trim).filter(|u| !u.is_empty()) {
            let by_uri = process_dir.join(uri);
            if by_uri.is_file() {
                return Ok(by_uri);
            }
        }
        Err(ReferenceError::FlowNotFound {
            uuid: self.uuid.clone(),
            flow_uuid: flow_uuid.to_string(),
            path: primary,
        })
    }

    /// HS code: level-2 class of the `HS` classification, else the class id
    /// inside an `hsClassification` block.
    pub fn hs_class(&self) -> Option<String> {
        let doc = &self.document;
        let root = doc.root();

        let by_classification = doc
            .find_all(root, loc::CLASSIFICATION)
            .filter(|&c| {
                doc.attribute(c, loc::NAME_ATTR)
                    .is_some_and(|n| n.trim().eq_ignore_ascii_case(constants::HS_CLASSIFICATION_NAME))
            })
            .flat_map(|c| doc.children(c))
            .find(|&class| {
                doc.local_name(class) == loc::CLASS
                    && doc.attribute(class, loc::LEVEL_ATTR).map(str::trim)
                        == Some(constants::HS_CLASS_LEVEL)
            })
            .and_then(|class| doc.attribute(class, loc::CLASS_ID_ATTR));

        by_classification
            .or_else(|| {
                let block = doc.find_descendant(root, loc::HS_CLASSIFICATION)?;
                doc.descendants(block)
                    .find_map(|d| doc.attribute(d, loc::CLASS_ID_ATTR))
            })
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
    }

    /// LCIA results with every module value multiplied by `scaling_factor`.
    pub fn lcia_results(&self, synonyms: &IndicatorSynonyms, scaling_factor: f64) -> LciaExtraction {
        lcia::extract(&self.document, &self.uuid, synonyms, scaling_factor)
    }

    /// Rewrite module-tagged amounts of indicators present in `impacts`.
    /// Everything else in the document is reproduced byte for byte.
    pub fn synthesize(&self, impacts: &ImpactMap, synonyms: &IndicatorSynonyms) -> String {
        let canonical: FxHashMap<String, &ModuleValues> = impacts
            .iter()
            .map(|(name, values)| (synonyms.canonicalize(name), values))
            .collect();

        let doc = &self.document;
        let mut patch = XmlPatch::new(doc);
        for block in doc.find_all(doc.root(), loc::LCIA_RESULT) {
            let Some(values) = lcia::block_label(doc, block)
                .and_then(|label| canonical.get(&synonyms.canonicalize(label)))
            else {
                continue;
            };
            for (module, amount) in lcia::module_amounts(doc, block) {
                if let Some(value) = values.get(&module) {
                    patch.set_text(amount, format_value(*value));
                }
            }
        }
        tracing::debug!(uuid = %self.uuid, edits = patch.len(), "Synthesized process");
        patch.apply()
    }
}
