//! Adapter over the `html5ever` + `markup5ever_rcdom` tree.
//!
//! The walker never looks at `NodeData` directly. It sees a closed set of
//! node kinds and tag identities, so the tree library stays an interface
//! detail.
//!
//! The parsed [`RcDom`] is owned by whoever called [`parse`]; it is released
//! when that value leaves scope, on success and error paths alike.
//! `markup5ever_rcdom` drops children iteratively, so releasing a deeply
//! nested tree does not recurse.

use html5ever::tendril::TendrilSink;
use html5ever::{ns, parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Element kinds that affect section output. Everything else is transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Anchor,
    Paragraph,
    Heading(u8),
    LineBreak,
    HorizontalRule,
    Other,
}

impl Tag {
    pub fn from_local_name(name: &str) -> Self {
        match name {
            "a" => Tag::Anchor,
            "p" => Tag::Paragraph,
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "h5" => Tag::Heading(5),
            "h6" => Tag::Heading(6),
            "br" => Tag::LineBreak,
            "hr" => Tag::HorizontalRule,
            _ => Tag::Other,
        }
    }
}

/// What the walker needs to know about a node.
pub enum NodeKind<'a> {
    /// The document root: children are visited, nothing else happens.
    Document,
    Element { tag: Tag, handle: &'a Handle },
    Text(String),
    /// Comments, doctypes and processing instructions.
    Ignored,
}

/// Parse markup into a tree. Malformed input is recovered, never rejected.
pub fn parse(markup: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(markup)
}

/// Classify a node. Only HTML-namespace elements carry a tag identity.
pub fn kind(handle: &Handle) -> NodeKind<'_> {
    match &handle.data {
        NodeData::Document => NodeKind::Document,
        NodeData::Element { name, .. } => {
            let tag = if name.ns == ns!(html) {
                Tag::from_local_name(&name.local)
            } else {
                Tag::Other
            };
            NodeKind::Element { tag, handle }
        }
        NodeData::Text { contents } => NodeKind::Text(contents.borrow().to_string()),
        NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => NodeKind::Ignored,
    }
}

/// Look up an attribute value on an element by local name.
pub fn attribute(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Snapshot of a node's children in document order.
pub fn children(handle: &Handle) -> Vec<Handle> {
    handle.children.borrow().clone()
}
