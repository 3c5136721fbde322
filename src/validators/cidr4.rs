//! IPv4 CIDR range validator.
//!
//! Checks `address/prefix` in three steps: the address must pass [`ipv4`],
//! the prefix must be an integer in `0..=32`, and every octet must satisfy
//! the rule table row for that prefix. All four octets are checked so one
//! call reports every violated octet.

use super::ipv4::{invalid_ipv4, parse_octets};
use crate::models::{
    FailureKey, Message, MessageId, OctetName, OctetRule, ValidationResult, MAX_LENGTH,
};
use crate::rules::{LiteralRules, RuleTable};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

lazy_static! {
    static ref PREFIX: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
    static ref PREFIX_LEADING_ZEROES: Regex = Regex::new(r"^0+[0-9]+$").expect("Invalid Regex?");
}

/// Check one octet against its rule, recording a `cidr-details` failure for
/// each violation. Returns true when the octet passes.
fn check_octet(
    rule: OctetRule,
    name: OctetName,
    value: u8,
    result: &mut ValidationResult,
) -> bool {
    match rule {
        OctetRule::Unconstrained => true,
        OctetRule::FixedZero => {
            if value == 0 {
                return true;
            }
            result.add(
                FailureKey::CidrDetails,
                Message::new(MessageId::CidrOctetMustBeZero).arg(name.as_str()),
            );
            false
        }
        OctetRule::OneOf(values) => {
            if values.contains(&value) {
                return true;
            }
            result.add(
                FailureKey::CidrDetails,
                Message::new(MessageId::CidrOctetOneOf)
                    .arg(name.as_str())
                    .arg(values),
            );
            false
        }
        OctetRule::Stepped { min, max, by } => {
            if value < min || value > max {
                result.add(
                    FailureKey::CidrDetails,
                    Message::new(MessageId::CidrOctetRange)
                        .arg(name.as_str())
                        .arg(min)
                        .arg(max),
                );
                false
            } else if value % by != 0 {
                result.add(
                    FailureKey::CidrDetails,
                    Message::new(MessageId::CidrOctetDivisible)
                        .arg(name.as_str())
                        .arg(by),
                );
                false
            } else {
                true
            }
        }
    }
}

/// Parse the prefix part, `None` unless it is an integer in `0..=32`
/// written without leading zeroes.
fn parse_prefix(range: &str) -> Option<u8> {
    if !PREFIX.is_match(range) || PREFIX_LEADING_ZEROES.is_match(range) {
        return None;
    }
    range.parse::<u8>().ok().filter(|p| *p <= MAX_LENGTH)
}

/// Validate `value` against `rules`, returning the address and prefix.
///
/// # Panics
/// If `rules` has no row for a prefix in `0..=32`.
pub fn parse_cidr4_with(
    value: &str,
    rules: &dyn RuleTable,
) -> Result<(Ipv4Addr, u8), ValidationResult> {
    log::trace!("cidr4({value:?})");

    let Some((address, range)) = value.split_once('/') else {
        log::debug!("cidr4 {value:?} has no range");
        return Err(ValidationResult::failed(
            FailureKey::Cidr,
            MessageId::CidrMissingRange,
        ));
    };

    let Some(octets) = parse_octets(address) else {
        log::debug!("cidr4 {value:?} has an invalid address");
        return Err(invalid_ipv4());
    };

    if range.is_empty() {
        return Err(ValidationResult::failed(
            FailureKey::Cidr,
            MessageId::CidrMissingRange,
        ));
    }

    let Some(prefix) = parse_prefix(range) else {
        log::debug!("cidr4 {value:?} range out of bounds");
        return Err(ValidationResult::failed(
            FailureKey::Cidr,
            MessageId::CidrRangeOutOfBounds,
        ));
    };

    let rule = rules
        .rule(prefix)
        .unwrap_or_else(|| panic!("CIDR rule table has no entry for /{prefix}"));

    let mut result = ValidationResult::new();
    let mut all_pass = true;
    for (name, octet_rule) in rule.octets() {
        // No short circuit, every octet gets its details.
        let passed = check_octet(octet_rule, name, octets[name.index()], &mut result);
        all_pass &= passed;
    }

    if all_pass {
        Ok((Ipv4Addr::from(octets), prefix))
    } else {
        log::debug!("cidr4 {value:?} octets off the /{prefix} boundary");
        result.add_error(
            FailureKey::Cidr,
            Message::new(MessageId::CidrUnsupported)
                .arg(address)
                .arg(prefix),
        );
        Err(result)
    }
}

/// [`parse_cidr4_with`] using the literal rule table.
pub fn parse_cidr4(value: &str) -> Result<(Ipv4Addr, u8), ValidationResult> {
    parse_cidr4_with(value, &LiteralRules)
}

/// Validate an IPv4 CIDR range against `rules`.
pub fn cidr4_with(value: &str, rules: &dyn RuleTable) -> ValidationResult {
    match parse_cidr4_with(value, rules) {
        Ok(_) => ValidationResult::new(),
        Err(result) => result,
    }
}

/// Validate an IPv4 CIDR range.
///
/// # Examples
/// ```
/// use ip_validators::validators::cidr4;
/// assert!(cidr4("10.0.0.0/24").is_valid);
/// assert!(!cidr4("10.0.0.5/24").is_valid);
/// ```
pub fn cidr4(value: &str) -> ValidationResult {
    cidr4_with(value, &LiteralRules)
}
