//! Rendering a section sequence for humans and tools
//!
//! - `json`: array of `{ "text", "link" }` objects (link omitted when absent)
//! - `text`: the concatenated display text
//! - `tag`: one XML-like `<section>` line per section

pub mod json;
pub mod tag;

use crate::error::FlowError;
use crate::section::{plain_text, Section};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Output formats a section sequence can be rendered to
///
/// Deserializes from the same lowercase names [`OutputFormat::name`] returns,
/// so configuration files can name a format directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Text,
    Tag,
}

impl OutputFormat {
    /// Every format, in the order they are listed to users
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Text, OutputFormat::Tag];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
            OutputFormat::Tag => "tag",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON array of {text, link} objects",
            OutputFormat::Text => "Display text only, links dropped",
            OutputFormat::Tag => "One <section> tag per line",
        }
    }

    /// Render `sections`. `pretty` only affects JSON.
    pub fn render(self, sections: &[Section], pretty: bool) -> Result<String, FlowError> {
        match self {
            OutputFormat::Json => json::to_json(sections, pretty),
            OutputFormat::Text => Ok(plain_text(sections)),
            OutputFormat::Tag => Ok(tag::to_tag_str(sections)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FlowError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| FlowError::FormatNotFound(name.to_string()))
    }
}
