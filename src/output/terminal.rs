//! Terminal output utilities.
//!
//! Provides coloured, aligned rendering of validation results.

use crate::locale::Localizer;
use crate::models::ValidationResult;
use colored::Colorize;

/// Format a value as a quoted, left-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted string padded to `width`
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.chars().count();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:<width$}")
    }
}

/// Render one validation outcome.
///
/// The first line holds the value, validator name and verdict; each failure
/// follows on its own indented line with its key.
pub fn format_result(
    value: &str,
    validator: &str,
    result: &ValidationResult,
    localizer: &dyn Localizer,
    width: usize,
) -> String {
    let verdict = if result.is_valid {
        "valid".green().to_string()
    } else {
        "invalid".red().bold().to_string()
    };
    let mut out = format!("{} {validator} {verdict}", format_field(value, width));
    for failure in result.failures() {
        out.push_str(&format!(
            "\n    [{key}] {text}",
            key = failure.key.as_str().yellow(),
            text = localizer.localize(&failure.message)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Maketext;
    use crate::validators::{cidr4, ipv4};

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "\"test\"    ");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_result_valid() {
        colored::control::set_override(false);
        let out = format_result("1.2.3.4", "ipv4", &ipv4(Some("1.2.3.4")), &Maketext, 12);
        assert_eq!(out, "\"1.2.3.4\"    ipv4 valid");
    }

    #[test]
    fn test_format_result_failures() {
        colored::control::set_override(false);
        let out = format_result("10.0.0.5/24", "cidr4", &cidr4("10.0.0.5/24"), &Maketext, 0);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "\"10.0.0.5/24\" cidr4 invalid");
        assert!(lines[1].starts_with("    [cidr-details] In an IP address"));
        assert!(lines[2].starts_with("    [cidr] The IP address, 10.0.0.5,"));
    }
}
