//! CSV column-consistency check.
//!
//! Each line is split with a quote-aware scanner and its field count compared
//! against the header. Only the shape of the table is checked; field contents
//! are never interpreted.

use crate::error::ValidationError;
use crate::format::Format;
use crate::scan::text::{is_blank, trim_text};

/// Split one line into fields.
///
/// Commas separate fields except inside a quoted region. A `"` toggles the
/// quoted state, except that `""` inside quotes is an escaped literal quote.
/// The final field is always emitted, so the result is never empty.
///
/// An unterminated quote simply runs to the end of the line; no error is
/// raised here.
#[must_use]
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Iterate the lines of `text`, accepting both LF and CRLF endings.
///
/// A lone `\r` is not a line break.
fn csv_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Check that every data row has as many fields as the header.
///
/// Blank lines are skipped but still counted for line numbers. Every
/// mismatching row is reported, in document order.
#[must_use]
pub fn validate_csv(text: &str) -> Vec<ValidationError> {
    let trimmed = trim_text(text);
    if trimmed.is_empty() {
        return vec![ValidationError::EmptyInput {
            format: Format::Csv,
        }];
    }

    let lines: Vec<&str> = csv_lines(trimmed).collect();
    let Some((header, rows)) = lines.split_first() else {
        return vec![ValidationError::CsvMissingDataRow];
    };
    if rows.is_empty() {
        return vec![ValidationError::CsvMissingDataRow];
    }

    let expected = split_csv_line(header).len();
    if expected < 1 {
        return vec![ValidationError::CsvEmptyHeader];
    }

    let mut errors = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        if is_blank(row) {
            continue;
        }
        let actual = split_csv_line(row).len();
        if actual != expected {
            errors.push(ValidationError::CsvColumnMismatch {
                // header is line 1
                line: idx + 2,
                actual,
                expected,
            });
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_fields() {
        assert_eq!(split_csv_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_empty_line_yields_one_empty_field() {
        assert_eq!(split_csv_line(""), vec![""]);
    }

    #[test]
    fn test_split_keeps_empty_fields() {
        assert_eq!(split_csv_line(",,"), vec!["", "", ""]);
        assert_eq!(split_csv_line("a,"), vec!["a", ""]);
    }

    #[test]
    fn test_split_quoted_comma_stays_in_field() {
        assert_eq!(
            split_csv_line(r#"Ana,"hello, world""#),
            vec!["Ana", "hello, world"]
        );
    }

    #[test]
    fn test_split_doubled_quote_is_literal() {
        assert_eq!(
            split_csv_line(r#""say ""hi""",x"#),
            vec![r#"say "hi""#, "x"]
        );
    }

    #[test]
    fn test_split_doubled_quote_outside_quotes_toggles_twice() {
        // Outside quotes "" opens and closes an empty quoted region.
        assert_eq!(split_csv_line(r#"a"",b"#), vec!["a", "b"]);
    }

    #[test]
    fn test_split_unterminated_quote_swallows_rest_of_line() {
        assert_eq!(split_csv_line(r#"a,"b,c"#), vec!["a", "b,c"]);
    }

    #[test]
    fn test_split_non_ascii() {
        assert_eq!(
            split_csv_line("\u{0418}\u{043c}\u{0435},\u{00e9}"),
            vec!["\u{0418}\u{043c}\u{0435}", "\u{00e9}"]
        );
    }

    #[test]
    fn test_validate_consistent_table() {
        assert!(validate_csv("a,b,c\n1,2,3").is_empty());
    }

    #[test]
    fn test_validate_reports_short_row() {
        let errors = validate_csv("a,b,c\n1,2");
        assert_eq!(
            errors,
            vec![ValidationError::CsvColumnMismatch {
                line: 2,
                actual: 2,
                expected: 3
            }]
        );
    }

    #[test]
    fn test_validate_quoted_comma() {
        assert!(validate_csv("name,note\nAna,\"hello, world\"\nBob,plain").is_empty());
    }

    #[test]
    fn test_validate_empty_input() {
        assert_eq!(
            validate_csv("  \n\t "),
            vec![ValidationError::EmptyInput {
                format: Format::Csv
            }]
        );
    }

    #[test]
    fn test_validate_header_only() {
        assert_eq!(
            validate_csv("a,b,c\n"),
            vec![ValidationError::CsvMissingDataRow]
        );
    }

    #[test]
    fn test_validate_reports_every_bad_row_in_order() {
        let errors = validate_csv("a,b\n1\n1,2\n1,2,3\n4");
        let lines: Vec<usize> = errors
            .iter()
            .map(|e| match e {
                ValidationError::CsvColumnMismatch { line, .. } => *line,
                other => panic!("unexpected error: {other:?}"),
            })
            .collect();
        assert_eq!(lines, vec![2, 4, 5]);
    }

    #[test]
    fn test_validate_skips_blank_lines_but_counts_them() {
        let errors = validate_csv("a,b\n\n   \n1,2,3");
        assert_eq!(
            errors,
            vec![ValidationError::CsvColumnMismatch {
                line: 4,
                actual: 3,
                expected: 2
            }]
        );
    }

    #[test]
    fn test_validate_no_break_space_row_is_not_blank() {
        assert_eq!(
            validate_csv("a,b\n\u{A0}\n1,2"),
            vec![ValidationError::CsvColumnMismatch {
                line: 2,
                actual: 1,
                expected: 2
            }]
        );
        assert!(validate_csv("a,b\n\u{3000}\n1,2").is_empty());
    }

    #[test]
    fn test_validate_crlf_line_endings() {
        assert!(validate_csv("a,b\r\n1,2\r\n3,4\r\n").is_empty());
    }

    #[test]
    fn test_validate_lone_cr_is_not_a_line_break() {
        // The whole text is a single line, so there is no data row.
        assert_eq!(
            validate_csv("a,b\r1,2"),
            vec![ValidationError::CsvMissingDataRow]
        );
    }

    #[test]
    fn test_validate_header_plus_blank_rows_is_ok() {
        // Leading/trailing whitespace is trimmed, interior blank rows are skipped.
        assert!(validate_csv("a,b\n \n1,2").is_empty());
    }

    #[test]
    fn test_validate_unterminated_quote_is_permissive() {
        assert!(validate_csv("a,b\n1,\"2").is_empty());
    }
}
