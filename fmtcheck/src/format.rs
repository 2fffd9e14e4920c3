//! Format tags accepted by the dispatcher.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

/// A text format that can be checked for syntactic validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    Xml,
    Yaml,
    Csv,
    Emmet,
}

impl Format {
    /// Every supported format, in tag order.
    pub const ALL: [Self; 5] = [Self::Json, Self::Xml, Self::Yaml, Self::Csv, Self::Emmet];

    /// Parse a request tag. Surrounding whitespace and letter case are ignored.
    ///
    /// Returns `None` for anything outside the fixed tag set.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            "yaml" => Some(Self::Yaml),
            "csv" => Some(Self::Csv),
            "emmet" => Some(Self::Emmet),
            _ => None,
        }
    }

    /// Pick a format from a file extension (`.yml` counts as YAML).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yml" => Some(Self::Yaml),
            other => Self::from_tag(other),
        }
    }

    /// Lowercase request tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
            Self::Emmet => "emmet",
        }
    }

    /// Prefix used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
            Self::Yaml => "YAML",
            Self::Csv => "CSV",
            Self::Emmet => "Emmet",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned by [`Format::from_str`] for an unknown tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported validation format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownFormat(s.trim().to_lowercase()))
    }
}
