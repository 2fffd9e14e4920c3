//! Shared output formatting for validation results.
//!
//! Provides JSON and plain-text formatters for `ValidationResult`.
//! Color/terminal formatting is left to the CLI layer.

use std::io::Write;

use crate::format::Format;
use crate::report::ValidationResult;

/// Write a `ValidationResult` as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(result: &ValidationResult, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Write a `ValidationResult` as a human-readable report.
///
/// `source` names the validated input (a path or `<stdin>`).
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(
    result: &ValidationResult,
    format: Format,
    source: &str,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  FORMAT VALIDATOR")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Input:          {source}")?;
    writeln!(writer, "  Format:         {format}")?;
    writeln!(writer, "  Errors found:   {}", result.errors_count())?;
    writeln!(writer)?;

    if !result.errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  VALIDATION ERRORS")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for error in &result.errors {
            writeln!(writer, "{error}")?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if result.ok {
        writeln!(writer, "\u{2713} {source} is valid {format}")?;
    } else {
        writeln!(
            writer,
            "\u{2717} {source} is not valid {format} ({} error(s))",
            result.errors_count()
        )?;
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
