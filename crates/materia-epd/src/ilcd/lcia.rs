//! LCIA indicator blocks.

use materia_core::types::{LifeCycleModule, ModuleValues};

use super::locators as loc;
use super::synonyms::IndicatorSynonyms;
use super::xml::{ElementId, XmlDocument};

/// One indicator's per-module contributions, keyed by canonical name.
#[derive(Debug, Clone, PartialEq)]
pub struct LciaResult {
    pub indicator: String,
    pub values: ModuleValues,
}

/// Results of one document plus the reasons blocks were skipped.
#[derive(Debug, Clone, Default)]
pub struct LciaExtraction {
    pub results: Vec<LciaResult>,
    pub skipped: Vec<String>,
}

/// Label of an LCIA block: the method reference's short description,
/// English preferred.
pub(crate) fn block_label(document: &XmlDocument, block: ElementId) -> Option<&str> {
    let method = document.child(block, loc::LCIA_METHOD)?;
    preferred_description(document, method)
}

/// First non-empty `shortDescription` child, English preferred.
pub(crate) fn preferred_description(document: &XmlDocument, id: ElementId) -> Option<&str> {
    let descriptions: Vec<ElementId> = document
        .children(id)
        .filter(|&c| document.local_name(c) == loc::SHORT_DESCRIPTION)
        .filter(|&c| !document.text(c).is_empty())
        .collect();
    descriptions
        .iter()
        .find(|&&c| document.attribute(c, loc::LANG_ATTR) == Some("en"))
        .or_else(|| descriptions.first())
        .map(|&c| document.text(c))
}

/// Module-tagged amount elements below a block whose module is canonical.
pub(crate) fn module_amounts(
    document: &XmlDocument,
    block: ElementId,
) -> impl Iterator<Item = (LifeCycleModule, ElementId)> + '_ {
    document.find_all(block, loc::AMOUNT).filter_map(move |amount| {
        let module = document.attribute(amount, loc::MODULE_ATTR)?.parse().ok()?;
        Some((module, amount))
    })
}

pub(crate) fn extract(
    document: &XmlDocument,
    uuid: &str,
    synonyms: &IndicatorSynonyms,
    scaling_factor: f64,
) -> LciaExtraction {
    let mut extraction = LciaExtraction::default();

    for block in document.find_all(document.root(), loc::LCIA_RESULT) {
        let Some(label) = block_label(document, block) else {
            extraction
                .skipped
                .push(format!("{uuid}: LCIA block without method label"));
            continue;
        };
        let indicator = synonyms.canonicalize(label);

        let mut values = ModuleValues::new();
        for (module, amount) in module_amounts(document, block) {
            match document.text(amount).parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    values.insert(module, value * scaling_factor);
                }
                _ => {}
            }
        }

        if values.is_empty() {
            extraction
                .skipped
                .push(format!("{uuid}: indicator '{label}' has no module values"));
            continue;
        }
        if extraction.results.iter().any(|r| r.indicator == indicator) {
            extraction
                .skipped
                .push(format!("{uuid}: duplicate indicator '{indicator}'"));
            continue;
        }
        extraction.results.push(LciaResult { indicator, values });
    }

    extraction
}
