//! IP address validators.
//!
//! - [`ipv4`] - dotted-quad addresses
//! - [`ipv6`] - IPv6 addresses through an [`Ipv6Delegate`]
//! - [`cidr4`] - IPv4 CIDR ranges checked against a [`crate::rules::RuleTable`]
//! - [`Registry`] - validators addressed by name

mod cidr4;
mod ipv4;
mod ipv6;
mod registry;

pub use cidr4::{cidr4, cidr4_with, parse_cidr4, parse_cidr4_with};
pub use ipv4::ipv4;
pub use ipv6::{ipv6, ipv6_with, Ipv6Delegate, StdIpv6};
pub use registry::{Registry, ValidatorFn, DEFAULT_REGISTRY};
