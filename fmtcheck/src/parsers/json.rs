//! JSON syntax check backed by `serde_json`.

use serde_json::Value;

use crate::error::ValidationError;
use crate::format::Format;
use crate::parsers::{non_empty, parser_detail};

/// Validate `text` as a single JSON document.
///
/// Content after the first value (other than whitespace) is rejected.
#[must_use]
pub fn validate_json(text: &str) -> Vec<ValidationError> {
    let trimmed = match non_empty(text, Format::Json) {
        Ok(t) => t,
        Err(e) => return vec![e],
    };

    match serde_json::from_str::<Value>(trimmed) {
        Ok(_) => Vec::new(),
        Err(e) => vec![ValidationError::InvalidJson {
            detail: parser_detail(&e),
        }],
    }
}
