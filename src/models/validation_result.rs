//! Accumulator of named validation failures.

use super::Message;
use crate::locale::Localizer;
use serde::Serialize;
use std::fmt;

/// Category of a validation failure.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKey {
    /// Address syntax or range violation.
    Ipv4,
    /// Rejected by the IPv6 delegate.
    Ipv6,
    /// Missing or out of range prefix, or the CIDR summary marker.
    Cidr,
    /// One violated octet constraint.
    CidrDetails,
}

impl FailureKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKey::Ipv4 => "ipv4",
            FailureKey::Ipv6 => "ipv6",
            FailureKey::Cidr => "cidr",
            FailureKey::CidrDetails => "cidr-details",
        }
    }
}

impl fmt::Display for FailureKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single keyed failure.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub key: FailureKey,
    pub message: Message,
}

/// Outcome of one validator call.
///
/// Starts valid and empty. Adding a failure through [`ValidationResult::add_error`]
/// also marks it invalid; [`ValidationResult::add`] only records the message,
/// so a caller doing its own bookkeeping must [`ValidationResult::invalidate`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    failures: Vec<Failure>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        ValidationResult {
            is_valid: true,
            failures: vec![],
        }
    }
}

impl ValidationResult {
    pub fn new() -> ValidationResult {
        ValidationResult::default()
    }

    /// Build an invalid result carrying a single failure.
    pub fn failed<M: Into<Message>>(key: FailureKey, message: M) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.add_error(key, message);
        result
    }

    /// Record a failure without touching `is_valid`.
    pub fn add<M: Into<Message>>(&mut self, key: FailureKey, message: M) -> &mut Self {
        self.failures.push(Failure {
            key,
            message: message.into(),
        });
        self
    }

    /// Record a failure and mark the result invalid.
    pub fn add_error<M: Into<Message>>(&mut self, key: FailureKey, message: M) -> &mut Self {
        self.add(key, message);
        self.is_valid = false;
        self
    }

    pub fn invalidate(&mut self) -> &mut Self {
        self.is_valid = false;
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.failures.clear();
        self.is_valid = true;
        self
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn has_failure(&self, key: FailureKey) -> bool {
        self.failures.iter().any(|f| f.key == key)
    }

    /// Latest failure recorded under `key`.
    pub fn get(&self, key: FailureKey) -> Option<&Failure> {
        self.failures.iter().rev().find(|f| f.key == key)
    }

    /// Number of failures recorded under `key`.
    pub fn count(&self, key: FailureKey) -> usize {
        self.failures.iter().filter(|f| f.key == key).count()
    }

    /// Failure keys in insertion order, duplicates included.
    pub fn keys(&self) -> Vec<FailureKey> {
        self.failures.iter().map(|f| f.key).collect()
    }

    /// Render every failure through `localizer`, joined by `delimiter`.
    pub fn render(&self, localizer: &dyn Localizer, delimiter: &str) -> String {
        self.failures
            .iter()
            .map(|f| localizer.localize(&f.message))
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}
