//! Named validator registry.
//!
//! Form integrations look validators up by name and call them with the field
//! value and an optional argument. Every built-in validator is registered in
//! [`Registry::with_defaults`].

use super::{cidr4, ipv4, ipv6};
use crate::models::{FieldReport, ValidationResult};
use lazy_static::lazy_static;
use std::error::Error;

/// Calling convention shared by all registered validators: the field value
/// and an optional validator argument.
pub type ValidatorFn = fn(Option<&str>, Option<&str>) -> ValidationResult;

fn ipv4_rule(value: Option<&str>, _arg: Option<&str>) -> ValidationResult {
    ipv4(value)
}

fn ipv6_rule(value: Option<&str>, _arg: Option<&str>) -> ValidationResult {
    ipv6(value)
}

fn cidr4_rule(value: Option<&str>, _arg: Option<&str>) -> ValidationResult {
    cidr4(value.unwrap_or_default())
}

lazy_static! {
    /// Registry holding the built-in validators.
    pub static ref DEFAULT_REGISTRY: Registry = Registry::with_defaults();
}

#[derive(Clone, Default)]
pub struct Registry {
    entries: Vec<(&'static str, ValidatorFn)>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Registry {
        Registry::default()
    }

    /// A registry with `ipv4`, `ipv6` and `cidr4`.
    pub fn with_defaults() -> Registry {
        let mut registry = Registry::new();
        registry
            .register("ipv4", ipv4_rule)
            .register("ipv6", ipv6_rule)
            .register("cidr4", cidr4_rule);
        registry
    }

    /// Register `validator` under `name`, replacing an earlier registration.
    pub fn register(&mut self, name: &'static str, validator: ValidatorFn) -> &mut Self {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => {
                log::debug!("Replacing validator {name}");
                entry.1 = validator;
            }
            None => self.entries.push((name, validator)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<ValidatorFn> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, validator)| *validator)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Run the validator registered as `name`.
    pub fn validate(
        &self,
        name: &str,
        value: Option<&str>,
        arg: Option<&str>,
    ) -> Result<ValidationResult, Box<dyn Error>> {
        let validator = self
            .get(name)
            .ok_or_else(|| format!("Unknown validator: {name}"))?;
        Ok(validator(value, arg))
    }

    /// Run every validator in `names` on one field value.
    ///
    /// Each result is stored in the report under its validator name.
    pub fn check_field(
        &self,
        names: &[&str],
        value: Option<&str>,
        arg: Option<&str>,
    ) -> Result<FieldReport, Box<dyn Error>> {
        let mut report = FieldReport::new();
        for name in names {
            let result = self.validate(name, value, arg)?;
            report.set(name, result);
        }
        Ok(report)
    }
}
