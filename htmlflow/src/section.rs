//! The flat output model: runs of display text with an optional link target.

use serde::{Deserialize, Serialize};

/// One contiguous run of display text.
///
/// `link` is only ever set on a section whose text came from inside an
/// anchor, and only once that anchor has been fully visited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Section {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    pub fn linked(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
        }
    }

    pub fn is_link(&self) -> bool {
        self.link.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Concatenate the display text of every section, dropping link targets.
pub fn plain_text(sections: &[Section]) -> String {
    sections.iter().map(|s| s.text.as_str()).collect()
}
