//! Dotted-quad IPv4 address validator.

use crate::models::{FailureKey, MessageId, ValidationResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref POSITIVE_INTEGER: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
    static ref LEADING_ZEROES: Regex = Regex::new(r"^0+[0-9]+$").expect("Invalid Regex?");
}

/// Parse a dotted-quad into its octets, applying every `ipv4` rule.
///
/// The first segment may not be `0` and no segment may carry a leading zero.
pub(crate) fn parse_octets(value: &str) -> Option<[u8; 4]> {
    let chunks: Vec<&str> = value.split('.').collect();
    if chunks.len() != 4 || chunks[0] == "0" {
        return None;
    }

    let mut octets = [0u8; 4];
    for (octet, chunk) in octets.iter_mut().zip(&chunks) {
        if !POSITIVE_INTEGER.is_match(chunk) {
            return None;
        }
        // A too-long digit run overflows u8, same as > 255.
        *octet = chunk.parse().ok()?;
        // Leading zeroes are rejected by BIND.
        if LEADING_ZEROES.is_match(chunk) {
            return None;
        }
    }
    Some(octets)
}

pub(crate) fn invalid_ipv4() -> ValidationResult {
    ValidationResult::failed(FailureKey::Ipv4, MessageId::Ipv4Invalid)
}

/// Validate an IPv4 address.
///
/// Exactly one `ipv4` failure is reported no matter how many segments are bad.
///
/// # Examples
/// ```
/// use ip_validators::validators::ipv4;
/// assert!(ipv4(Some("192.168.1.1")).is_valid);
/// assert!(!ipv4(Some("192.168.01.1")).is_valid);
/// assert!(!ipv4(None).is_valid);
/// ```
pub fn ipv4(value: Option<&str>) -> ValidationResult {
    log::trace!("ipv4({value:?})");
    let Some(value) = value else {
        return invalid_ipv4();
    };
    match parse_octets(value) {
        Some(_) => ValidationResult::new(),
        None => {
            log::debug!("ipv4 rejected {value:?}");
            invalid_ipv4()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        for value in ["192.168.1.1", "10.0.0.0", "255.255.255.255", "1.0.0.0", "8.8.8.8"] {
            let result = ipv4(Some(value));
            assert!(result.is_valid, "{value}");
            assert!(!result.has_failures(), "{value}");
        }
    }

    #[test]
    fn test_missing_value() {
        let result = ipv4(None);
        assert!(!result.is_valid);
        assert_eq!(result.keys(), vec![FailureKey::Ipv4]);
    }

    #[test]
    fn test_wrong_segment_count() {
        for value in ["", "1", "1.2.3", "1.2.3.4.5", "1..2.3", "1.2.3.4."] {
            let result = ipv4(Some(value));
            assert!(!result.is_valid, "{value:?}");
            assert_eq!(result.keys(), vec![FailureKey::Ipv4], "{value:?}");
        }
    }

    #[test]
    fn test_zero_first_segment() {
        assert!(!ipv4(Some("0.1.2.3")).is_valid);
        assert!(!ipv4(Some("0.0.0.0")).is_valid);
    }

    #[test]
    fn test_non_numeric_segment() {
        for value in ["a.b.c.d", "1.2.3.-4", "1.2.3.+4", "1.2. 3.4", "1.2.3.4 ", "1.2.٣.4"] {
            assert!(!ipv4(Some(value)).is_valid, "{value:?}");
        }
    }

    #[test]
    fn test_out_of_range_segment() {
        assert!(!ipv4(Some("256.1.1.1")).is_valid);
        assert!(!ipv4(Some("1.1.1.999")).is_valid);
        assert!(!ipv4(Some("1.1.1.99999999999999999999")).is_valid);
    }

    #[test]
    fn test_leading_zero_segment() {
        assert!(!ipv4(Some("192.168.01.1")).is_valid);
        assert!(!ipv4(Some("10.00.0.1")).is_valid);
        assert!(!ipv4(Some("10.0.0.007")).is_valid);
        assert!(ipv4(Some("10.0.0.0")).is_valid);
        assert!(ipv4(Some("10.10.100.0")).is_valid);
    }

    #[test]
    fn test_single_failure_for_many_bad_segments() {
        let result = ipv4(Some("300.01.x.999"));
        assert_eq!(result.failures().len(), 1);
    }

    #[test]
    fn test_every_octet_value_is_accepted() {
        for n in 0..=255u16 {
            let value = format!("10.{n}.{n}.{n}");
            assert!(ipv4(Some(&value)).is_valid, "{value}");
            let first = format!("{n}.1.1.1");
            assert_eq!(ipv4(Some(&first)).is_valid, n != 0, "{first}");
        }
    }

    #[test]
    fn test_parse_octets() {
        assert_eq!(parse_octets("172.16.254.1"), Some([172, 16, 254, 1]));
        assert_eq!(parse_octets("172.16.254.01"), None);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(ipv4(Some("10.0.0.256")), ipv4(Some("10.0.0.256")));
        assert_eq!(ipv4(Some("10.0.0.1")), ipv4(Some("10.0.0.1")));
    }
}
