//! IPv4 CIDR value and prefix mask utilities.
//!
//! Provides [`Ipv4Cidr`], a CIDR block that has passed the `cidr4` validator,
//! along with the mask arithmetic the rule table is derived from.

use super::ValidationResult;
use crate::validators::parse_cidr4;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_validators::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    let host_bits = MAX_LENGTH
        .checked_sub(len)
        .ok_or_else(|| format!("Prefix /{len} is longer than {MAX_LENGTH} bits"))?;
    // A shift by the full width is zero: /0 has no network bits.
    Ok(u32::MAX.checked_shl(u32::from(host_bits)).unwrap_or(0))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from((u32::from(addr) & mask) | !mask))
}

/// A validated IPv4 CIDR block.
///
/// Can only be built through [`FromStr`] (or serde), so every value satisfies
/// the prefix boundary rules: host bits below the prefix are zero.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Cidr {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Ipv4Cidr {
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Highest address of the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address for {self}: {e}"))
    }
}

impl FromStr for Ipv4Cidr {
    type Err = ValidationResult;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = parse_cidr4(s)?;
        Ok(Ipv4Cidr { addr, prefix })
    }
}

impl std::fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Ipv4Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ipv4Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|result: ValidationResult| {
            let keys: Vec<&str> = result.keys().iter().map(|k| k.as_str()).collect();
            de::Error::custom(format!("invalid CIDR {s}: [{}]", keys.join(", ")))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FailureKey;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(17).unwrap(), 0xFFFF8000);
        assert_eq!(get_cidr_mask(30).unwrap(), 0xFFFFFFFC);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), ip);
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(broadcast_addr(ip, 32).unwrap(), ip);
    }

    #[test]
    fn test_parse_cidr() {
        let cidr: Ipv4Cidr = "10.0.0.4/30".parse().unwrap();
        assert_eq!(cidr.addr(), Ipv4Addr::new(10, 0, 0, 4));
        assert_eq!(cidr.prefix(), 30);
        assert_eq!(cidr.broadcast(), Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(cidr.to_string(), "10.0.0.4/30");
    }

    #[test]
    fn test_parse_cidr_rejects_host_bits() {
        let err = "10.0.0.5/24".parse::<Ipv4Cidr>().unwrap_err();
        assert!(!err.is_valid);
        assert!(err.has_failure(FailureKey::CidrDetails));
        assert!(err.has_failure(FailureKey::Cidr));
    }

    #[test]
    fn test_broadcast_full_prefix() {
        let host: Ipv4Cidr = "10.1.2.3/32".parse().unwrap();
        assert_eq!(host.broadcast(), Ipv4Addr::new(10, 1, 2, 3));
        let all: Ipv4Cidr = "1.0.0.0/8".parse().unwrap();
        assert_eq!(all.broadcast(), Ipv4Addr::new(1, 255, 255, 255));
    }

    #[test]
    fn test_parse_cidr_rejects_padded_prefix() {
        let err = "10.0.0.0/024".parse::<Ipv4Cidr>().unwrap_err();
        assert_eq!(err.keys(), vec![FailureKey::Cidr]);
        let cidr: Ipv4Cidr = "10.0.0.0/24".parse().unwrap();
        assert_eq!(cidr.to_string(), "10.0.0.0/24");
    }

    #[test]
    fn test_serde_string_form() {
        let cidr: Ipv4Cidr = "172.16.0.0/12".parse().unwrap();
        let json = serde_json::to_string(&cidr).unwrap();
        assert_eq!(json, "\"172.16.0.0/12\"");
        let back: Ipv4Cidr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cidr);
    }

    #[test]
    fn test_deserialize_reports_failure_keys() {
        let err = serde_json::from_str::<Ipv4Cidr>("\"10.0.0.0/33\"").unwrap_err();
        assert!(err.to_string().contains("invalid CIDR 10.0.0.0/33: [cidr]"));
    }
}
