//! # fmtcheck
//!
//! Syntax validation for JSON, XML, YAML, CSV and Emmet abbreviations.
//!
//! Every call checks one complete in-memory text and returns a
//! [`ValidationResult`]: `ok` plus an ordered list of single-line messages.
//! Malformed input is never an `Err`; it is reported in the result.
//!
//! JSON, YAML and XML are delegated to `serde_json`, `serde-saphyr` and
//! `roxmltree`. CSV and Emmet use the hand-written scanners in [`scan`].
//!
//! ## Quick Start
//!
//! ```rust
//! use fmtcheck::{validate, Validator, ValidationConfig};
//!
//! let result = validate("emmet", "div>ul>li*3");
//! assert!(result.ok);
//!
//! let validator = Validator::new(ValidationConfig::default().with_max_input_bytes(1024));
//! let result = validator.validate("csv", "a,b,c\n1,2");
//! assert!(!result.ok);
//! println!("{}", result.errors[0]);
//! ```

mod config;
mod dispatch;
mod error;
mod format;
pub mod output;
pub mod parsers;
mod report;
mod request;
pub mod scan;

pub use config::{DEFAULT_MAX_INPUT_BYTES, ValidationConfig};
pub use dispatch::{Validator, validate_format};
pub use error::{ErrorKind, ValidationError};
pub use format::{Format, UnknownFormat};
pub use report::ValidationResult;
pub use request::ValidationRequest;

/// Validate `text` as the format named by `tag`, with the default configuration.
///
/// The tag is trimmed and matched case-insensitively against
/// `json`, `xml`, `yaml`, `csv` and `emmet`.
#[must_use]
pub fn validate(tag: &str, text: &str) -> ValidationResult {
    Validator::default().validate(tag, text)
}
