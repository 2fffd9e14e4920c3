//! Configuration for the validation dispatcher.

/// Default upper bound on input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Dispatcher options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationConfig {
    /// Longest text (in bytes) that will be handed to a validator.
    /// Larger texts produce a single `InputTooLarge` error without parsing.
    /// Bounds worst-case parse time of the external parsers.
    pub max_input_bytes: usize,
}

impl ValidationConfig {
    /// Configuration without a size limit.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_input_bytes: usize::MAX,
        }
    }

    /// Set the size limit.
    #[must_use]
    pub const fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}
