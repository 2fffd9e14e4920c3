//! Emmet abbreviation grammar check.
//!
//! Three independent checks whose errors accumulate in this order:
//! 1. alphabet: only letters, digits, whitespace and `_ - . # > + * ( ) { } [ ]`
//! 2. bracket balance for `()`, `{}` and `[]`
//! 3. quantifiers: every `*` is followed (after optional whitespace) by a digit
//!
//! The quantifier scan stops at its first violation, so it contributes at most
//! one error. None of the checks suppresses another.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::format::Format;
use crate::scan::brackets::{BracketPair, check_balance};
use crate::scan::text::{is_spacing, starts_with_digit, trim_text};

/// Allowed alphabet. Whitespace is ASCII only (space, tab, LF, VT, FF, CR).
static EMMET_ALPHABET: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^[A-Za-z0-9_\-.#>+*\(\)\{\}\[\] \t\n\x0B\x0C\r]+$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid Emmet alphabet regex: {err}"),
    }
});

const BRACKET_PAIRS: [BracketPair; 3] = [
    BracketPair::PARENS,
    BracketPair::BRACES,
    BracketPair::SQUARE,
];

/// Validate an Emmet abbreviation such as `div>ul>li*3`.
#[must_use]
pub fn validate_emmet(text: &str) -> Vec<ValidationError> {
    let trimmed = trim_text(text);
    if trimmed.is_empty() {
        return vec![ValidationError::EmptyInput {
            format: Format::Emmet,
        }];
    }

    let mut errors = Vec::new();

    if !EMMET_ALPHABET.is_match(trimmed) {
        errors.push(ValidationError::EmmetDisallowedCharacters);
    }

    errors.extend(
        BRACKET_PAIRS
            .iter()
            .filter_map(|pair| check_balance(trimmed, *pair)),
    );

    if !quantifiers_have_counts(trimmed) {
        errors.push(ValidationError::EmmetQuantifierWithoutNumber);
    }

    errors
}

/// `true` if every `*` is followed by a digit, skipping spacing in between.
fn quantifiers_have_counts(text: &str) -> bool {
    let mut rest = text;
    while let Some(pos) = rest.find('*') {
        rest = &rest[pos + 1..];
        if !starts_with_digit(rest.trim_start_matches(is_spacing)) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_abbreviations() {
        for text in [
            "div>ul>li*3",
            "div#page>div.logo+ul#navigation>li*5>a{Item}",
            "(header>nav)+main+footer",
            "input[type]",
            "li * 3",
            "  p.note  ",
        ] {
            assert!(validate_emmet(text).is_empty(), "expected valid: {text}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            validate_emmet(" \t\n"),
            vec![ValidationError::EmptyInput {
                format: Format::Emmet
            }]
        );
    }

    #[test]
    fn test_trailing_star() {
        assert_eq!(
            validate_emmet("div>ul>li*"),
            vec![ValidationError::EmmetQuantifierWithoutNumber]
        );
    }

    #[test]
    fn test_star_followed_by_letter() {
        assert_eq!(
            validate_emmet("li*x"),
            vec![ValidationError::EmmetQuantifierWithoutNumber]
        );
    }

    #[test]
    fn test_quantifier_error_reported_once() {
        assert_eq!(
            validate_emmet("a*+b*+c*"),
            vec![ValidationError::EmmetQuantifierWithoutNumber]
        );
    }

    #[test]
    fn test_later_bad_quantifier_is_found() {
        assert_eq!(
            validate_emmet("ul>li*2>a*"),
            vec![ValidationError::EmmetQuantifierWithoutNumber]
        );
    }

    #[test]
    fn test_closing_before_opening() {
        assert_eq!(
            validate_emmet("div)("),
            vec![ValidationError::UnexpectedClosingBracket { label: "()" }]
        );
    }

    #[test]
    fn test_disallowed_characters() {
        assert_eq!(
            validate_emmet("div$span"),
            vec![ValidationError::EmmetDisallowedCharacters]
        );
    }

    #[test]
    fn test_non_ascii_letters_are_disallowed() {
        assert_eq!(
            validate_emmet("d\u{00ef}v"),
            vec![ValidationError::EmmetDisallowedCharacters]
        );
    }

    #[test]
    fn test_alphabet_failure_does_not_suppress_other_checks() {
        assert_eq!(
            validate_emmet("div$(span"),
            vec![
                ValidationError::EmmetDisallowedCharacters,
                ValidationError::MissingClosingBracket { label: "()" },
            ]
        );
    }

    #[test]
    fn test_all_checks_accumulate_in_order() {
        assert_eq!(
            validate_emmet("$)}{[*"),
            vec![
                ValidationError::EmmetDisallowedCharacters,
                ValidationError::UnexpectedClosingBracket { label: "()" },
                ValidationError::UnexpectedClosingBracket { label: "{}" },
                ValidationError::MissingClosingBracket { label: "[]" },
                ValidationError::EmmetQuantifierWithoutNumber,
            ]
        );
    }

    #[test]
    fn test_no_break_space_is_not_trimmed() {
        assert_eq!(
            validate_emmet("\u{A0}"),
            vec![ValidationError::EmmetDisallowedCharacters]
        );
    }

    #[test]
    fn test_non_ascii_count_fails_alphabet_only() {
        assert_eq!(
            validate_emmet("li*\u{0663}"),
            vec![ValidationError::EmmetDisallowedCharacters]
        );
        assert_eq!(
            validate_emmet("li*\u{3000}2"),
            vec![ValidationError::EmmetDisallowedCharacters]
        );
    }

    #[test]
    fn test_whitespace_inside_abbreviation_is_allowed() {
        assert!(validate_emmet("div >\tp").is_empty());
    }
}
