//! IPv6 address validator.
//!
//! Address parsing is delegated; this module only wraps the verdict.

use crate::models::{FailureKey, MessageId, ValidationResult};
use std::net::Ipv6Addr;

/// Decides whether a string is a valid IPv6 address.
pub trait Ipv6Delegate {
    fn is_valid(&self, value: &str) -> bool;
}

/// Delegate backed by [`Ipv6Addr`]'s parser.
#[derive(Debug, Default, Copy, Clone)]
pub struct StdIpv6;

impl Ipv6Delegate for StdIpv6 {
    fn is_valid(&self, value: &str) -> bool {
        value.parse::<Ipv6Addr>().is_ok()
    }
}

impl<F> Ipv6Delegate for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, value: &str) -> bool {
        self(value)
    }
}

/// Validate an IPv6 address using `delegate`.
pub fn ipv6_with(delegate: &dyn Ipv6Delegate, value: Option<&str>) -> ValidationResult {
    log::trace!("ipv6({value:?})");
    match value {
        Some(value) if delegate.is_valid(value) => ValidationResult::new(),
        _ => {
            log::debug!("ipv6 rejected {value:?}");
            ValidationResult::failed(FailureKey::Ipv6, MessageId::Ipv6Invalid)
        }
    }
}

/// Validate an IPv6 address with the standard library parser.
pub fn ipv6(value: Option<&str>) -> ValidationResult {
    ipv6_with(&StdIpv6, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ipv6() {
        for value in ["::1", "2001:db8::1", "fe80::1", "::ffff:192.0.2.1", "::"] {
            assert!(ipv6(Some(value)).is_valid, "{value}");
        }
    }

    #[test]
    fn test_invalid_ipv6() {
        for value in ["", "2001:db8::gggg", "1:2:3:4:5:6:7:8:9", "192.168.1.1", "::1::"] {
            let result = ipv6(Some(value));
            assert!(!result.is_valid, "{value}");
            assert_eq!(result.keys(), vec![FailureKey::Ipv6]);
        }
        assert!(!ipv6(None).is_valid);
    }

    #[test]
    fn test_custom_delegate() {
        let accept_all = |_: &str| true;
        assert!(ipv6_with(&accept_all, Some("anything")).is_valid);
        // A missing value never reaches the delegate.
        assert!(!ipv6_with(&accept_all, None).is_valid);
    }
}
