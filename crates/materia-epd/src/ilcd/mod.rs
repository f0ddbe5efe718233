//! ILCD interchange documents.
//!
//! Elements are matched by local name so documents with different namespace
//! prefixes (or none) are read the same way. Write-back goes through
//! [`XmlPatch`], which only touches the targeted text nodes.

pub mod flow;
pub mod lcia;
pub mod locators;
pub mod patch;
pub mod process;
pub mod synonyms;
pub mod xml;

pub use flow::IlcdFlow;
pub use lcia::{LciaExtraction, LciaResult};
pub use patch::XmlPatch;
pub use process::IlcdProcess;
pub use synonyms::IndicatorSynonyms;
pub use xml::{ElementId, XmlDocument, XmlElement, XmlSyntaxError};

/// Render a number for write-back.
pub(crate) fn format_value(value: f64) -> String {
    value.to_string()
}
