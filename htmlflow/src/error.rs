//! Error types for section conversion and rendering

use std::fmt;

/// Errors that can occur while flattening or rendering a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// The document nests elements deeper than the configured limit
    DepthExceeded { limit: usize },
    /// Output format not known to [`crate::formats::OutputFormat`]
    FormatNotFound(String),
    /// Error while rendering sections
    SerializationError(String),
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::DepthExceeded { limit } => {
                write!(f, "Document nesting exceeds the maximum depth of {limit}")
            }
            FlowError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FlowError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FlowError {}
