//! Domain models for IP address validation.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`ValidationResult`] - keyed failures produced by one validator call
//! - [`Message`] - lexicon key plus interpolation arguments
//! - [`OctetRule`] and [`CidrRule`] - per-prefix octet constraints
//! - [`FieldReport`] - results of several validators bound to one field
//! - [`Ipv4Cidr`] - a validated CIDR block

mod field_report;
mod ipv4;
mod message;
mod octet_rule;
mod validation_result;

// Re-export public types
pub use field_report::FieldReport;
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, Ipv4Cidr, MAX_LENGTH};
pub use message::{Message, MessageArg, MessageId};
pub use octet_rule::{CidrRule, OctetName, OctetRule};
pub use validation_result::{Failure, FailureKey, ValidationResult};
