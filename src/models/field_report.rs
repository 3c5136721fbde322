//! Per-field extended error registry.
//!
//! A form field bound to several validators keeps one [`ValidationResult`]
//! per validator name. The field is valid only when every stored result is.

use super::ValidationResult;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldReport {
    results: Vec<(String, ValidationResult)>,
}

impl FieldReport {
    pub fn new() -> FieldReport {
        FieldReport::default()
    }

    /// Store `result` under `validator`, replacing any earlier result.
    pub fn set(&mut self, validator: &str, result: ValidationResult) {
        match self.results.iter_mut().find(|(name, _)| name == validator) {
            Some(entry) => entry.1 = result,
            None => self.results.push((validator.to_string(), result)),
        }
    }

    pub fn get(&self, validator: &str) -> Option<&ValidationResult> {
        self.results
            .iter()
            .find(|(name, _)| name == validator)
            .map(|(_, result)| result)
    }

    pub fn remove(&mut self, validator: &str) -> Option<ValidationResult> {
        let index = self.results.iter().position(|(name, _)| name == validator)?;
        Some(self.results.remove(index).1)
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_valid)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationResult)> {
        self.results.iter().map(|(name, result)| (name.as_str(), result))
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FailureKey, MessageId};

    #[test]
    fn test_set_replaces_by_name() {
        let mut report = FieldReport::new();
        report.set(
            "ipv4",
            ValidationResult::failed(FailureKey::Ipv4, MessageId::Ipv4Invalid),
        );
        assert!(!report.is_valid());
        report.set("ipv4", ValidationResult::new());
        assert!(report.is_valid());
        assert_eq!(report.iter().count(), 1);
    }

    #[test]
    fn test_remove() {
        let mut report = FieldReport::new();
        report.set("cidr4", ValidationResult::new());
        assert!(report.has_results());
        assert!(report.remove("cidr4").is_some());
        assert!(report.remove("cidr4").is_none());
        assert!(!report.has_results());
        // Empty report has nothing blocking the field.
        assert!(report.is_valid());
    }
}
