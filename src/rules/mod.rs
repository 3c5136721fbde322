//! CIDR rule table.
//!
//! For every prefix length `0..=32` a [`CidrRule`] says which values each
//! octet may hold so that the address sits on that prefix boundary:
//! - [`table`] - the literal 33 row table used by the validator
//! - [`derived`] - the same table computed from the prefix mask

mod derived;
mod table;

use crate::models::{CidrRule, OctetRule};

pub use derived::DerivedRules;
pub use table::{LiteralRules, CIDR_RULES};

/// Legal boundary octets for a stride of 128.
pub const HALVES: OctetRule = OctetRule::OneOf(&[0, 128]);
/// Legal boundary octets for a stride of 64.
pub const QUARTERS: OctetRule = OctetRule::OneOf(&[0, 64, 128, 192]);

/// Source of per-prefix octet rules.
///
/// Implementations must return a row for every prefix in `0..=32`.
pub trait RuleTable {
    fn rule(&self, prefix: u8) -> Option<CidrRule>;
}
