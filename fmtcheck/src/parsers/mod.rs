//! Parser collaborators for JSON, YAML and XML.
//!
//! Each wraps a third-party parser used purely as a syntax oracle: success
//! means the text is valid, and any failure becomes a single
//! [`ValidationError`] with a one-line detail message.

pub mod json;
pub mod xml;
pub mod yaml;

use std::fmt::Display;

use crate::error::ValidationError;
use crate::format::Format;
use crate::scan::text::trim_text;

/// A parser error as a one-line detail message.
pub(crate) fn parser_detail(err: &impl Display) -> String {
    sanitize_message(&err.to_string())
}

/// Collapse CR/LF to spaces and trim. An empty message becomes `unknown error`.
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    let flat = message.replace(['\n', '\r'], " ");
    let flat = flat.trim();
    if flat.is_empty() {
        "unknown error".to_owned()
    } else {
        flat.to_owned()
    }
}

/// Shared empty-input guard: returns the trimmed text, or the error to report.
pub(crate) fn non_empty(text: &str, format: Format) -> Result<&str, ValidationError> {
    let trimmed = trim_text(text);
    if trimmed.is_empty() {
        Err(ValidationError::EmptyInput { format })
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_flattens_lines() {
        assert_eq!(
            sanitize_message("  line one\r\nline two\n"),
            "line one  line two"
        );
    }

    #[test]
    fn test_sanitize_empty_message() {
        assert_eq!(sanitize_message(" \n "), "unknown error");
    }

    #[test]
    fn test_non_empty_keeps_no_break_space() {
        assert_eq!(non_empty("\u{A0}", Format::Json), Ok("\u{A0}"));
    }

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty("  {} \n", Format::Json), Ok("{}"));
        assert_eq!(
            non_empty("\t", Format::Yaml),
            Err(ValidationError::EmptyInput {
                format: Format::Yaml
            })
        );
    }
}
