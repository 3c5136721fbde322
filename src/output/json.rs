//! JSON output of validation results.

use crate::locale::Localizer;
use crate::models::{FailureKey, MessageArg, MessageId, ValidationResult};
use serde::Serialize;
use std::error::Error;

/// One failure with both its lexicon data and rendered text.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportFailure {
    pub key: FailureKey,
    pub id: MessageId,
    pub args: Vec<MessageArg>,
    pub text: String,
}

/// Outcome of validating one value, ready for serialization.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub value: String,
    pub validator: String,
    pub is_valid: bool,
    pub failures: Vec<ReportFailure>,
}

impl Report {
    pub fn new(
        value: &str,
        validator: &str,
        result: &ValidationResult,
        localizer: &dyn Localizer,
    ) -> Report {
        Report {
            value: value.to_string(),
            validator: validator.to_string(),
            is_valid: result.is_valid,
            failures: result
                .failures()
                .iter()
                .map(|f| ReportFailure {
                    key: f.key,
                    id: f.message.id,
                    args: f.message.args.clone(),
                    text: localizer.localize(&f.message),
                })
                .collect(),
        }
    }
}

pub fn to_json(reports: &[Report]) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(reports)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Maketext;
    use crate::validators::cidr4;

    #[test]
    fn test_report_json() {
        let value = "192.168.1.64/25";
        let report = Report::new(value, "cidr4", &cidr4(value), &Maketext);
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&[report]).unwrap()).unwrap();
        let first = &json[0];
        assert_eq!(first["value"], value);
        assert_eq!(first["is_valid"], false);
        assert_eq!(first["failures"][0]["key"], "cidr-details");
        assert_eq!(first["failures"][0]["id"], "cidr-octet-one-of");
        assert_eq!(first["failures"][0]["args"][1][1], "128");
        assert_eq!(first["failures"][1]["key"], "cidr");
        assert_eq!(first["failures"][1]["args"][1], 25);
    }
}
