//! IPv4, IPv6 and IPv4 CIDR validators.
//!
//! Every validator is a pure function returning a [`models::ValidationResult`]
//! that carries keyed failures (`ipv4`, `ipv6`, `cidr`, `cidr-details`), each
//! with a localizable [`models::Message`].
//!
//! ```
//! use ip_validators::locale::Maketext;
//! use ip_validators::validators::cidr4;
//!
//! let result = cidr4("10.0.0.5/30");
//! assert!(!result.is_valid);
//! assert!(result.render(&Maketext, "\n").contains("evenly divisible by “4”"));
//! ```

pub mod config;
pub mod locale;
pub mod models;
pub mod output;
pub mod rules;
pub mod validators;

pub use models::{FailureKey, Ipv4Cidr, ValidationResult};
pub use validators::{cidr4, ipv4, ipv6, Registry, DEFAULT_REGISTRY};
