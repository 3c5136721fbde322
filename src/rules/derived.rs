//! Rule table computed from the prefix mask.

use super::{RuleTable, HALVES, QUARTERS};
use crate::models::{get_cidr_mask, CidrRule, OctetRule};

/// Derives each row from the bytes of the subnet mask.
///
/// A mask byte of `0xFF` leaves the octet free, `0x00` forces it to zero and
/// anything in between allows the multiples of `256 - byte`.
#[derive(Debug, Default, Copy, Clone)]
pub struct DerivedRules;

fn octet_rule(mask_byte: u8) -> OctetRule {
    match mask_byte {
        0xFF => OctetRule::Unconstrained,
        0x00 => OctetRule::FixedZero,
        0x80 => HALVES,
        0xC0 => QUARTERS,
        byte => OctetRule::Stepped {
            min: 0,
            max: byte,
            by: (!byte).wrapping_add(1),
        },
    }
}

impl RuleTable for DerivedRules {
    fn rule(&self, prefix: u8) -> Option<CidrRule> {
        let mask = get_cidr_mask(prefix).ok()?;
        let [a, b, c, d] = mask.to_be_bytes();
        Some(CidrRule::new(
            octet_rule(a),
            octet_rule(b),
            octet_rule(c),
            octet_rule(d),
        ))
    }
}
