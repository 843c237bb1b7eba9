//! Flatten HTML into runs of display text for a text-layout consumer.
//!
//!     A layout engine that only knows how to flow plain strings still wants the basic look
//!     of rich text: paragraphs separated by blank lines, headings on their own line, links
//!     that can be hit-tested. This crate turns an HTML document into an ordered list of
//!     [`Section`]s, each a run of text with an optional link target, applying the same
//!     whitespace collapsing a browser would.
//!
//!     This is a pure lib: no printing, no environment lookups. The `htmlflow` binary in
//!     htmlflow-cli is the shell around it.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── section.rs              # Output model
//!     ├── whitespace.rs           # Normalizer, block starter, leading-trim policy
//!     ├── dom.rs                  # html5ever/rcdom adapter
//!     ├── walker.rs               # Tree → sections
//!     ├── formats                 # Rendering sections as json/text/tag
//!     └── lib.rs                  # Driver
//!
//! Pipeline
//!
//!     markup → html5ever (RcDom) → SectionWalker → Vec<Section>
//!
//!     Parsing never fails; html5ever recovers from malformed markup the way browsers do.
//!     The only error from a conversion is a document nested deeper than
//!     [`ConvertOptions::max_depth`].
//!
//! Recognized markup
//!
//!     <a href>        own section, link target from href
//!     <p>             blank line before (if preceded by text) and after
//!     <h1>..<h6>      blank line before (if preceded by text), line break after
//!     <br>            line break
//!     <hr>            blank line
//!
//!     Every other element is transparent: its children are visited, the element itself has
//!     no effect.

pub mod dom;
pub mod error;
pub mod formats;
pub mod section;
pub mod walker;
pub mod whitespace;

pub use error::FlowError;
pub use formats::OutputFormat;
pub use section::{plain_text, Section};

use markup5ever_rcdom::RcDom;
use walker::SectionWalker;

/// Default cap on element nesting during a walk.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Knobs for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Deepest element nesting the walker will descend into
    pub max_depth: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ConvertOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Convert HTML markup into sections with the default options.
///
/// `<p>Plain text</p>` yields a single unlinked section holding
/// `"Plain text\n\n"`.
pub fn convert(markup: &str) -> Result<Vec<Section>, FlowError> {
    convert_with_options(markup, &ConvertOptions::default())
}

/// Convert HTML markup into sections.
pub fn convert_with_options(
    markup: &str,
    options: &ConvertOptions,
) -> Result<Vec<Section>, FlowError> {
    // The tree lives until the end of this scope, whichever way we leave it.
    let dom = dom::parse(markup);
    sections_from_dom(&dom, options)
}

/// Walk an already parsed tree. The tree is only borrowed.
pub fn sections_from_dom(dom: &RcDom, options: &ConvertOptions) -> Result<Vec<Section>, FlowError> {
    let mut walker = SectionWalker::new(options.max_depth);
    walker.walk(&dom.document)?;
    let sections = walker.finish();
    log::debug!("converted document into {} sections", sections.len());
    Ok(sections)
}
