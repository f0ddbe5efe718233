//! Text-node write-back that leaves every other byte untouched.

use std::collections::BTreeMap;

use quick_xml::escape::escape;

use super::xml::{ElementId, XmlDocument};

/// An explicit list of `(element, new text)` edits against one document.
#[derive(Debug)]
pub struct XmlPatch<'d> {
    document: &'d XmlDocument,
    edits: BTreeMap<ElementId, String>,
}

impl<'d> XmlPatch<'d> {
    pub fn new(document: &'d XmlDocument) -> Self {
        Self {
            document,
            edits: BTreeMap::new(),
        }
    }

    /// Replace the text of a leaf element. Returns `false` (and records
    /// nothing) for elements that have child elements.
    pub fn set_text(&mut self, id: ElementId, value: impl Into<String>) -> bool {
        if !self.document.element(id).is_leaf() {
            return false;
        }
        self.edits.insert(id, value.into());
        true
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Serialize the document with all edits spliced in.
    pub fn apply(&self) -> String {
        let source = self.document.source();
        let mut out = String::with_capacity(source.len() + 16 * self.edits.len());
        let mut cursor = 0;

        // Ids are in document order and edited elements are leaves, so the
        // replaced ranges are ordered and disjoint.
        for (&id, value) in &self.edits {
            let element = self.document.element(id);
            let escaped = escape(value.as_str());
            match &element.content {
                Some(content) => {
                    out.push_str(&source[cursor..content.start]);
                    out.push_str(&escaped);
                    cursor = content.end;
                }
                None => {
                    let tag = &source[element.span.clone()];
                    let open = tag
                        .trim_end_matches('>')
                        .trim_end_matches('/')
                        .trim_end();
                    out.push_str(&source[cursor..element.span.start]);
                    out.push_str(open);
                    out.push('>');
                    out.push_str(&escaped);
                    out.push_str("</");
                    out.push_str(&element.qualified_name);
                    out.push('>');
                    cursor = element.span.end;
                }
            }
        }
        out.push_str(&source[cursor..]);
        out
    }
}
