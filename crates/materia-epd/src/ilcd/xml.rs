//! In-memory element tree with byte spans into the original source.

use std::ops::Range;

use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

/// Errors from the XML layer. Callers wrap these into `DocumentError`.
#[derive(Debug, thiserror::Error)]
pub enum XmlSyntaxError {
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("unbalanced element <{0}>")]
    Unbalanced(String),

    #[error("document has no root element")]
    Empty,
}

/// Index of an element in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct XmlAttribute {
    pub local_name: String,
    pub qualified_name: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct XmlElement {
    /// Resolved namespace URI, if the element is bound to one.
    pub namespace: Option<String>,
    pub local_name: String,
    pub qualified_name: String,
    pub attributes: Vec<XmlAttribute>,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
    /// Direct text content, unescaped, untrimmed.
    pub text: String,
    /// Bytes of the whole element, tags included.
    pub span: Range<usize>,
    /// Bytes between start and end tag; `None` for self-closing elements.
    pub content: Option<Range<usize>>,
    /// Descendants occupy ids `self + 1 .. subtree_end`.
    subtree_end: usize,
}

impl XmlElement {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_self_closing(&self) -> bool {
        self.content.is_none()
    }
}

/// A parsed document that keeps its source text.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    source: String,
    elements: Vec<XmlElement>,
}

impl XmlDocument {
    pub fn parse(source: String) -> Result<Self, XmlSyntaxError> {
        let elements = build_elements(&source)?;
        Ok(Self { source, elements })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, id: ElementId) -> &XmlElement {
        &self.elements[id.0]
    }

    pub fn local_name(&self, id: ElementId) -> &str {
        &self.elements[id.0].local_name
    }

    pub fn children(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        self.elements[id.0].children.iter().copied()
    }

    /// First direct child with the given local name.
    pub fn child(&self, id: ElementId, local: &str) -> Option<ElementId> {
        self.children(id).find(|&c| self.local_name(c) == local)
    }

    /// All descendants of `id` in document order, `id` excluded.
    pub fn descendants(&self, id: ElementId) -> impl Iterator<Item = ElementId> {
        (id.0 + 1..self.elements[id.0].subtree_end).map(ElementId)
    }

    pub fn find_descendant(&self, id: ElementId, local: &str) -> Option<ElementId> {
        self.descendants(id).find(|&d| self.local_name(d) == local)
    }

    pub fn find_all<'a>(
        &'a self,
        id: ElementId,
        local: &'a str,
    ) -> impl Iterator<Item = ElementId> + 'a {
        self.descendants(id)
            .filter(move |&d| self.local_name(d) == local)
    }

    /// Resolve a local-name path: the first element anywhere under `id`
    /// (or `id` itself) named `path[0]`, then direct children down the rest.
    pub fn find_path(&self, id: ElementId, path: &[&str]) -> Option<ElementId> {
        let (first, rest) = path.split_first()?;
        std::iter::once(id)
            .chain(self.descendants(id))
            .filter(|&e| self.local_name(e) == *first)
            .find_map(|start| {
                rest.iter()
                    .try_fold(start, |current, local| self.child(current, local))
            })
    }

    /// Direct text, trimmed.
    pub fn text(&self, id: ElementId) -> &str {
        self.elements[id.0].text.trim()
    }

    pub fn attribute(&self, id: ElementId, local: &str) -> Option<&str> {
        self.elements[id.0]
            .attributes
            .iter()
            .find(|a| a.local_name == local)
            .map(|a| a.value.as_str())
    }
}

fn build_elements(source: &str) -> Result<Vec<XmlElement>, XmlSyntaxError> {
    let mut reader = NsReader::from_str(source);
    let mut elements: Vec<XmlElement> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();

    loop {
        let (resolved, event) = reader.read_resolved_event()?;
        let namespace = owned_namespace(resolved);
        let end = reader.buffer_position() as usize;

        match event {
            Event::Start(ref start) | Event::Empty(ref start) => {
                let self_closing = matches!(event, Event::Empty(_));
                let tag_start = source[..end].rfind('<').unwrap_or(0);
                let mut attributes = Vec::new();
                for attr in start.attributes() {
                    let attr = attr?;
                    attributes.push(XmlAttribute {
                        local_name: utf8_lossy(attr.key.local_name().as_ref()),
                        qualified_name: utf8_lossy(attr.key.as_ref()),
                        value: attr.unescape_value()?.into_owned(),
                    });
                }

                let id = elements.len();
                let parent = stack.last().copied();
                if let Some(parent) = parent {
                    elements[parent].children.push(ElementId(id));
                }
                elements.push(XmlElement {
                    namespace,
                    local_name: utf8_lossy(start.local_name().as_ref()),
                    qualified_name: utf8_lossy(start.name().as_ref()),
                    attributes,
                    parent: parent.map(ElementId),
                    children: Vec::new(),
                    text: String::new(),
                    span: tag_start..end,
                    content: (!self_closing).then_some(end..end),
                    subtree_end: id + 1,
                });
                if !self_closing {
                    stack.push(id);
                }
            }
            Event::End(ref end_tag) => {
                let id = stack
                    .pop()
                    .ok_or_else(|| XmlSyntaxError::Unbalanced(utf8_lossy(end_tag.name().as_ref())))?;
                let tag_start = source[..end].rfind('<').unwrap_or(end);
                let subtree_end = elements.len();
                let element = &mut elements[id];
                if let Some(content) = element.content.as_mut() {
                    content.end = tag_start;
                }
                element.span.end = end;
                element.subtree_end = subtree_end;
            }
            Event::Text(ref text) => {
                if let Some(&top) = stack.last() {
                    elements[top].text.push_str(&text.unescape()?);
                }
            }
            Event::CData(ref data) => {
                if let Some(&top) = stack.last() {
                    elements[top].text.push_str(&utf8_lossy(&**data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(&open) = stack.last() {
        return Err(XmlSyntaxError::Unbalanced(elements[open].qualified_name.clone()));
    }
    if elements.is_empty() {
        return Err(XmlSyntaxError::Empty);
    }
    Ok(elements)
}

fn owned_namespace(resolved: ResolveResult<'_>) -> Option<String> {
    match resolved {
        ResolveResult::Bound(ns) => Some(utf8_lossy(ns.as_ref())),
        _ => None,
    }
}

fn utf8_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
