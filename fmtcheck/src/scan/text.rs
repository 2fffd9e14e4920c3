//! Character classes shared by the scanners and the empty-input guard.
//!
//! Trimming strips only space and C0 controls, so a text made of other
//! Unicode spaces (such as U+00A0) is not blank. Inside a text, spacing is
//! the Unicode space, line and paragraph separators (minus the no-break
//! ones) plus ASCII controls `\t \n VT FF \r` and `U+001C..=U+001F`.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_DECIMAL_DIGIT: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^\p{Nd}") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid decimal digit regex: {err}"),
    }
});

/// Strip leading and trailing characters at or below U+0020.
#[must_use]
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// `true` if `c` separates tokens.
#[must_use]
pub fn is_spacing(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

/// `true` if `text` is empty or made only of spacing.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_spacing)
}

/// `true` if `text` starts with a decimal digit of any script.
#[must_use]
pub fn starts_with_digit(text: &str) -> bool {
    LEADING_DECIMAL_DIGIT.is_match(text)
}
