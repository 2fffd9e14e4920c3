//! XML well-formedness check backed by `roxmltree`.
//!
//! DOCTYPE declarations are rejected outright, which also rules out entity
//! expansion and external DTD/entity fetches. `roxmltree` never performs I/O.
//! Namespace prefixes must be bound.

use roxmltree::{Document, ParsingOptions};

use crate::error::ValidationError;
use crate::format::Format;
use crate::parsers::{non_empty, parser_detail};

fn parsing_options() -> ParsingOptions {
    ParsingOptions {
        allow_dtd: false,
        ..ParsingOptions::default()
    }
}

/// Validate `text` as a well-formed XML document.
#[must_use]
pub fn validate_xml(text: &str) -> Vec<ValidationError> {
    let trimmed = match non_empty(text, Format::Xml) {
        Ok(t) => t,
        Err(e) => return vec![e],
    };

    match Document::parse_with_options(trimmed, parsing_options()) {
        Ok(_) => Vec::new(),
        Err(e) => vec![ValidationError::XmlNotWellFormed {
            detail: parser_detail(&e),
        }],
    }
}
