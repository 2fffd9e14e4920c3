//! Wire model of a validation request.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A `{ format, text }` request as received over the wire.
///
/// Both fields are lenient: a missing or `null` field becomes an empty string,
/// and scalar non-string values (numbers, booleans) are stringified. An empty
/// `text` is not a request error; each validator applies its own empty-input
/// rule. An empty `format` is reported as an unsupported format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub format: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
}

impl ValidationRequest {
    #[must_use]
    pub fn new(format: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            text: text.into(),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
