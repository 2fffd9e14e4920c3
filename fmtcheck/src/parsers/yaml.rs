//! YAML syntax check backed by `serde-saphyr`.

use serde::de::IgnoredAny;
use serde_saphyr::{DuplicateKeyPolicy, Options};

use crate::error::ValidationError;
use crate::format::Format;
use crate::parsers::{non_empty, parser_detail};

/// Validate `text` as a YAML document.
///
/// The document is walked without building a value tree, so any YAML
/// (including non-string mapping keys and tagged nodes) that parses is accepted.
/// A repeated mapping key is not an error; the last value wins.
#[must_use]
pub fn validate_yaml(text: &str) -> Vec<ValidationError> {
    let trimmed = match non_empty(text, Format::Yaml) {
        Ok(t) => t,
        Err(e) => return vec![e],
    };

    let options = Options {
        duplicate_keys: DuplicateKeyPolicy::LastWins,
        ..Options::default()
    };
    match serde_saphyr::from_str_with_options::<IgnoredAny>(trimmed, options) {
        Ok(_) => Vec::new(),
        Err(e) => vec![ValidationError::InvalidYaml {
            detail: parser_detail(&e),
        }],
    }
}
