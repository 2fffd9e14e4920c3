//! Single-pass bracket balance scanner.

use crate::error::ValidationError;

/// An opening/closing bracket pair and the label used in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketPair {
    pub open: char,
    pub close: char,
    pub label: &'static str,
}

impl BracketPair {
    pub const PARENS: Self = Self::new('(', ')', "()");
    pub const BRACES: Self = Self::new('{', '}', "{}");
    pub const SQUARE: Self = Self::new('[', ']', "[]");

    #[must_use]
    pub const fn new(open: char, close: char, label: &'static str) -> Self {
        Self { open, close, label }
    }
}

/// Scan `text` left to right keeping a running balance for `pair`.
///
/// Returns at most one error. The first time the balance drops below zero the
/// scan stops with [`ValidationError::UnexpectedClosingBracket`]; a positive
/// balance at the end gives [`ValidationError::MissingClosingBracket`].
#[must_use]
pub fn check_balance(text: &str, pair: BracketPair) -> Option<ValidationError> {
    let mut balance: usize = 0;
    for c in text.chars() {
        if c == pair.open {
            balance += 1;
        } else if c == pair.close {
            let Some(next) = balance.checked_sub(1) else {
                return Some(ValidationError::UnexpectedClosingBracket { label: pair.label });
            };
            balance = next;
        }
    }
    (balance != 0).then_some(ValidationError::MissingClosingBracket { label: pair.label })
}
