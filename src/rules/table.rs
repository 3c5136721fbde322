//! Literal per-prefix rule table.
//!
//! CIDR format: `a.b.c.d/prefix`. Each row lists the rule for one prefix,
//! any octet left `U` may hold any value.

use super::{RuleTable, HALVES, QUARTERS};
use crate::models::{CidrRule, OctetRule};

const U: OctetRule = OctetRule::Unconstrained;
const Z: OctetRule = OctetRule::FixedZero;

const fn by(max: u8, by: u8) -> OctetRule {
    OctetRule::Stepped { min: 0, max, by }
}

const fn row(a: OctetRule, b: OctetRule, c: OctetRule, d: OctetRule) -> CidrRule {
    CidrRule::new(a, b, c, d)
}

/// Rules indexed by prefix length.
#[rustfmt::skip]
pub static CIDR_RULES: [CidrRule; 33] = [
    /*  0 */ row(Z,             Z,             Z,             Z),
    /*  1 */ row(HALVES,        Z,             Z,             Z),
    /*  2 */ row(QUARTERS,      Z,             Z,             Z),
    /*  3 */ row(by(224, 32),   Z,             Z,             Z),
    /*  4 */ row(by(240, 16),   Z,             Z,             Z),
    /*  5 */ row(by(248, 8),    Z,             Z,             Z),
    /*  6 */ row(by(252, 4),    Z,             Z,             Z),
    /*  7 */ row(by(254, 2),    Z,             Z,             Z),
    /*  8 */ row(U,             Z,             Z,             Z),
    /*  9 */ row(U,             HALVES,        Z,             Z),
    /* 10 */ row(U,             QUARTERS,      Z,             Z),
    /* 11 */ row(U,             by(224, 32),   Z,             Z),
    /* 12 */ row(U,             by(240, 16),   Z,             Z),
    /* 13 */ row(U,             by(248, 8),    Z,             Z),
    /* 14 */ row(U,             by(252, 4),    Z,             Z),
    /* 15 */ row(U,             by(254, 2),    Z,             Z),
    /* 16 */ row(U,             U,             Z,             Z),
    /* 17 */ row(U,             U,             HALVES,        Z),
    /* 18 */ row(U,             U,             QUARTERS,      Z),
    /* 19 */ row(U,             U,             by(224, 32),   Z),
    /* 20 */ row(U,             U,             by(240, 16),   Z),
    /* 21 */ row(U,             U,             by(248, 8),    Z),
    /* 22 */ row(U,             U,             by(252, 4),    Z),
    /* 23 */ row(U,             U,             by(254, 2),    Z),
    /* 24 */ row(U,             U,             U,             Z),
    /* 25 */ row(U,             U,             U,             HALVES),
    /* 26 */ row(U,             U,             U,             QUARTERS),
    /* 27 */ row(U,             U,             U,             by(224, 32)),
    /* 28 */ row(U,             U,             U,             by(240, 16)),
    /* 29 */ row(U,             U,             U,             by(248, 8)),
    /* 30 */ row(U,             U,             U,             by(252, 4)),
    /* 31 */ row(U,             U,             U,             by(254, 2)),
    /* 32 */ row(U,             U,             U,             U),
];

/// The hand-written table, [`CIDR_RULES`].
#[derive(Debug, Default, Copy, Clone)]
pub struct LiteralRules;

impl RuleTable for LiteralRules {
    fn rule(&self, prefix: u8) -> Option<CidrRule> {
        CIDR_RULES.get(prefix as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_host_unconstrained() {
        let rule = LiteralRules.rule(32).unwrap();
        assert!(rule.accepts([255, 255, 255, 255]));
    }

    #[test]
    fn test_zero_prefix_all_zero() {
        let rule = LiteralRules.rule(0).unwrap();
        assert!(rule.accepts([0, 0, 0, 0]));
        assert!(!rule.accepts([1, 0, 0, 0]));
    }

    #[test]
    fn test_slash_26() {
        let rule = LiteralRules.rule(26).unwrap();
        assert_eq!(rule.d, OctetRule::OneOf(&[0, 64, 128, 192]));
        assert!(rule.accepts([192, 168, 7, 192]));
        assert!(!rule.accepts([192, 168, 7, 32]));
    }
}
