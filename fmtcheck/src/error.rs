//! Error types for format validation.
//!
//! Every problem a validator finds is a [`ValidationError`]. None of them are
//! fatal: the dispatcher renders them into the `errors` list of a
//! [`ValidationResult`](crate::ValidationResult) and the call still succeeds.

use thiserror::Error;

use crate::format::Format;

/// Coarse category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The text is empty or whitespace-only after trimming.
    EmptyInput,
    /// The text does not follow the grammar of the requested format.
    Malformed,
    /// The format tag is not one of the recognised values.
    UnsupportedFormat,
    /// The text exceeds the configured size limit and was not parsed.
    InputTooLarge,
}

/// A single problem found while validating a text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("{format}: empty input.")]
    EmptyInput { format: Format },

    /// `serde_json` rejected the text. `detail` is already a single line.
    #[error("JSON: invalid JSON - {detail}")]
    InvalidJson { detail: String },

    #[error("YAML: invalid YAML - {detail}")]
    InvalidYaml { detail: String },

    #[error("XML: not well-formed - {detail}")]
    XmlNotWellFormed { detail: String },

    #[error("CSV: expected a header row plus at least one data row.")]
    CsvMissingDataRow,

    #[error("CSV: empty header.")]
    CsvEmptyHeader,

    /// `line` is 1-based.
    #[error("CSV: line {line} has {actual} columns, expected {expected}.")]
    CsvColumnMismatch {
        line: usize,
        actual: usize,
        expected: usize,
    },

    #[error("Emmet: contains disallowed characters.")]
    EmmetDisallowedCharacters,

    /// Balance went negative: a closing bracket with no opening one before it.
    #[error("Emmet: unbalanced {label} (closing bracket without matching opening).")]
    UnexpectedClosingBracket { label: &'static str },

    /// Balance stayed positive at end of text.
    #[error("Emmet: unbalanced {label} (missing closing bracket).")]
    MissingClosingBracket { label: &'static str },

    #[error("Emmet: '*' must be followed by a number (e.g. li*3).")]
    EmmetQuantifierWithoutNumber,

    #[error("unsupported validation format: {tag}")]
    UnsupportedFormat { tag: String },

    #[error("{format}: input is {size} bytes, limit is {limit} bytes.")]
    InputTooLarge {
        format: Format,
        size: usize,
        limit: usize,
    },
}

impl ValidationError {
    /// Category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput { .. } => ErrorKind::EmptyInput,
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::InputTooLarge { .. } => ErrorKind::InputTooLarge,
            Self::InvalidJson { .. }
            | Self::InvalidYaml { .. }
            | Self::XmlNotWellFormed { .. }
            | Self::CsvMissingDataRow
            | Self::CsvEmptyHeader
            | Self::CsvColumnMismatch { .. }
            | Self::EmmetDisallowedCharacters
            | Self::UnexpectedClosingBracket { .. }
            | Self::MissingClosingBracket { .. }
            | Self::EmmetQuantifierWithoutNumber => ErrorKind::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_mismatch_message_names_line_and_counts() {
        let err = ValidationError::CsvColumnMismatch {
            line: 2,
            actual: 2,
            expected: 3,
        };
        assert_eq!(err.to_string(), "CSV: line 2 has 2 columns, expected 3.");
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_parse_message_is_prefixed_by_format() {
        let err = ValidationError::XmlNotWellFormed {
            detail: "unexpected end of stream".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "XML: not well-formed - unexpected end of stream"
        );

        let err = ValidationError::InvalidJson {
            detail: "EOF while parsing".to_owned(),
        };
        assert_eq!(err.to_string(), "JSON: invalid JSON - EOF while parsing");

        let err = ValidationError::InvalidYaml {
            detail: "did not find expected node content".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "YAML: invalid YAML - did not find expected node content"
        );
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            ValidationError::EmptyInput {
                format: Format::Csv
            }
            .kind(),
            ErrorKind::EmptyInput
        );
        assert_eq!(
            ValidationError::UnsupportedFormat {
                tag: "toml".to_owned()
            }
            .kind(),
            ErrorKind::UnsupportedFormat
        );
        assert_eq!(
            ValidationError::MissingClosingBracket { label: "()" }.kind(),
            ErrorKind::Malformed
        );
    }

    #[test]
    fn test_empty_input_message() {
        let err = ValidationError::EmptyInput {
            format: Format::Emmet,
        };
        assert_eq!(err.to_string(), "Emmet: empty input.");
    }
}
