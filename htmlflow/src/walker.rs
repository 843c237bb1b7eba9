//! Walks the parsed tree and splits its text into sections.
//!
//! # The Algorithm
//!
//! The walker owns the output vector; the *current* section is always the
//! last one. Each element is handled in three steps:
//!
//! 1. **Entering:**
//!    - `<a>` opens a fresh section if the current one already holds text,
//!      and remembers which section will collect the anchor's text
//!    - `<p>` and `<h1>`..`<h6>` start a block (trim, then blank line)
//!
//! 2. **Children:** visited in document order with the same rules. Text
//!    nodes are whitespace-normalized onto the current section.
//!
//! 3. **Leaving:**
//!    - `<a>` attaches its `href` to the remembered section, then opens a
//!      fresh section for whatever follows
//!    - `<p>` and `<hr>` append a blank line
//!    - `<h1>`..`<h6>` and `<br>` append a line break
//!
//! Recursion depth follows element nesting and is capped by
//! [`SectionWalker::new`]'s `max_depth`.

use crate::dom::{self, NodeKind, Tag};
use crate::error::FlowError;
use crate::section::Section;
use crate::whitespace::{normalize_into, should_trim_leading, start_block};
use markup5ever_rcdom::Handle;

const BLANK_LINE: &str = "\n\n";
const LINE_BREAK: &str = "\n";

pub struct SectionWalker {
    sections: Vec<Section>,
    max_depth: usize,
}

impl SectionWalker {
    /// Start with a single empty section so there is always a current one.
    pub fn new(max_depth: usize) -> Self {
        Self {
            sections: vec![Section::default()],
            max_depth,
        }
    }

    pub fn walk(&mut self, node: &Handle) -> Result<(), FlowError> {
        self.walk_node(node, 0)
    }

    /// Finish the walk, dropping the trailing section if nothing was written
    /// to it.
    pub fn finish(mut self) -> Vec<Section> {
        if self.sections.last().is_some_and(Section::is_empty) {
            self.sections.pop();
        }
        self.sections
    }

    fn current(&mut self) -> &mut Section {
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    fn open_section(&mut self) {
        self.sections.push(Section::default());
    }

    fn walk_node(&mut self, node: &Handle, depth: usize) -> Result<(), FlowError> {
        if depth > self.max_depth {
            log::warn!("nesting exceeds max depth {}", self.max_depth);
            return Err(FlowError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        match dom::kind(node) {
            NodeKind::Document => self.walk_children(node, depth),
            NodeKind::Element { tag, handle } => self.walk_element(tag, handle, depth),
            NodeKind::Text(raw) => {
                let trim = should_trim_leading(&self.sections);
                normalize_into(&raw, trim, &mut self.current().text);
                Ok(())
            }
            NodeKind::Ignored => Ok(()),
        }
    }

    fn walk_children(&mut self, node: &Handle, depth: usize) -> Result<(), FlowError> {
        for child in dom::children(node) {
            self.walk_node(&child, depth + 1)?;
        }
        Ok(())
    }

    fn walk_element(&mut self, tag: Tag, handle: &Handle, depth: usize) -> Result<(), FlowError> {
        match tag {
            Tag::Anchor => {
                if !self.current().is_empty() {
                    self.open_section();
                }
            }
            Tag::Paragraph | Tag::Heading(_) => start_block(BLANK_LINE, &mut self.current().text),
            Tag::LineBreak | Tag::HorizontalRule | Tag::Other => {}
        }
        let node_section = self.sections.len() - 1;

        self.walk_children(handle, depth)?;

        match tag {
            Tag::Anchor => {
                self.close_anchor(handle, node_section);
            }
            Tag::Paragraph | Tag::HorizontalRule => self.current().text.push_str(BLANK_LINE),
            Tag::Heading(_) | Tag::LineBreak => self.current().text.push_str(LINE_BREAK),
            Tag::Other => {}
        }
        Ok(())
    }

    /// An anchor that collected no text leaves the sections untouched, so no
    /// empty section is ever left behind. The section opened before it stays
    /// open, which still splits the surrounding text: `foo <a></a> bar`
    /// becomes `"foo "` and `"bar"`.
    ///
    /// A section keeps the first link attached to it. With nested anchors
    /// (reachable through `<object>`) the inner anchor closes first, so its
    /// href wins and the outer one only links text outside the inner anchor.
    fn close_anchor(&mut self, handle: &Handle, node_section: usize) {
        let section = &mut self.sections[node_section];
        if !section.is_empty() && section.link.is_none() {
            if let Some(href) = dom::attribute(handle, "href") {
                log::trace!("section {node_section} links to {href}");
                section.link = Some(href);
            }
        }

        if !self.current().is_empty() {
            self.open_section();
        }
    }
}
