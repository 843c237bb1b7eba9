//! JSON rendering via serde_json

use crate::error::FlowError;
use crate::section::Section;

pub fn to_json(sections: &[Section], pretty: bool) -> Result<String, FlowError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(sections)
    } else {
        serde_json::to_string(sections)
    };
    rendered.map_err(|e| FlowError::SerializationError(format!("JSON rendering failed: {e}")))
}
