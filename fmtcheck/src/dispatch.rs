//! Format dispatch.
//!
//! Maps a format tag to its validator and normalizes the outcome into a
//! [`ValidationResult`]. The dispatcher is immutable after construction and
//! holds no parser state, so one instance can serve any number of threads.

use crate::config::ValidationConfig;
use crate::error::ValidationError;
use crate::format::Format;
use crate::parsers::json::validate_json;
use crate::parsers::xml::validate_xml;
use crate::parsers::yaml::validate_yaml;
use crate::report::ValidationResult;
use crate::request::ValidationRequest;
use crate::scan::csv::validate_csv;
use crate::scan::emmet::validate_emmet;
use crate::scan::text::trim_text;

/// Run the validator for `format` over `text`.
#[must_use]
pub fn validate_format(format: Format, text: &str) -> Vec<ValidationError> {
    match format {
        Format::Json => validate_json(text),
        Format::Xml => validate_xml(text),
        Format::Yaml => validate_yaml(text),
        Format::Csv => validate_csv(text),
        Format::Emmet => validate_emmet(text),
    }
}

/// Stateless validation dispatcher.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    #[must_use]
    pub const fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate `text` against the format named by `tag`, returning typed errors.
    ///
    /// An unknown tag yields a single [`ValidationError::UnsupportedFormat`]
    /// regardless of `text`. A blank text yields the format's empty-input
    /// error at any size. Otherwise a text over the size limit yields a single
    /// [`ValidationError::InputTooLarge`] and is not scanned.
    #[must_use]
    pub fn check(&self, tag: &str, text: &str) -> Vec<ValidationError> {
        let Some(format) = Format::from_tag(tag) else {
            return vec![ValidationError::UnsupportedFormat {
                tag: tag.trim().to_lowercase(),
            }];
        };
        self.check_format(format, text)
    }

    /// Like [`Validator::check`] for an already resolved format.
    #[must_use]
    pub fn check_format(&self, format: Format, text: &str) -> Vec<ValidationError> {
        if text.len() > self.config.max_input_bytes && !trim_text(text).is_empty() {
            return vec![ValidationError::InputTooLarge {
                format,
                size: text.len(),
                limit: self.config.max_input_bytes,
            }];
        }
        validate_format(format, text)
    }

    /// Validate and render the outcome.
    #[must_use]
    pub fn validate(&self, tag: &str, text: &str) -> ValidationResult {
        ValidationResult::from_errors(&self.check(tag, text))
    }

    /// Validate a wire request.
    #[must_use]
    pub fn validate_request(&self, request: &ValidationRequest) -> ValidationResult {
        self.validate(&request.format, &request.text)
    }
}
