//! Output formatting for validation results.
//!
//! This module handles formatting and outputting results:
//! - [`json`] - JSON reports
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::{to_json, Report, ReportFailure};
pub use terminal::{format_field, format_result};
