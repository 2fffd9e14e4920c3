//! Validation result type.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Outcome of a single validation call.
///
/// `ok` is `true` exactly when `errors` is empty. Errors keep the order in
/// which they were detected. Serializes as `{"ok": true}` on success and
/// `{"ok": false, "errors": [...]}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
        }
    }

    /// Render validator errors into a result, preserving their order.
    #[must_use]
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        let errors: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Self {
            ok: errors.is_empty(),
            errors,
        }
    }

    /// Number of errors found.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.errors.len()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}
