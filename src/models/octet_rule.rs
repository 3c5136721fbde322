//! Per-octet constraints for a CIDR prefix boundary.

use std::fmt;

/// Position of an octet in `a.b.c.d`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OctetName {
    A,
    B,
    C,
    D,
}

impl OctetName {
    /// All octets, left to right.
    pub const ALL: [OctetName; 4] = [OctetName::A, OctetName::B, OctetName::C, OctetName::D];

    pub fn index(&self) -> usize {
        match self {
            OctetName::A => 0,
            OctetName::B => 1,
            OctetName::C => 2,
            OctetName::D => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OctetName::A => "a",
            OctetName::B => "b",
            OctetName::C => "c",
            OctetName::D => "d",
        }
    }
}

impl fmt::Display for OctetName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Constraint on the value of one octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OctetRule {
    /// Any value `0..=255`.
    Unconstrained,
    /// Must be exactly 0.
    FixedZero,
    /// Must be one of the listed values.
    OneOf(&'static [u8]),
    /// `min <= value <= max` and `value % by == 0`.
    Stepped { min: u8, max: u8, by: u8 },
}

impl OctetRule {
    pub fn accepts(&self, value: u8) -> bool {
        match *self {
            OctetRule::Unconstrained => true,
            OctetRule::FixedZero => value == 0,
            OctetRule::OneOf(values) => values.contains(&value),
            OctetRule::Stepped { min, max, by } => {
                (min..=max).contains(&value) && value % by == 0
            }
        }
    }
}

/// Rules for all four octets at one prefix length.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CidrRule {
    pub a: OctetRule,
    pub b: OctetRule,
    pub c: OctetRule,
    pub d: OctetRule,
}

impl CidrRule {
    pub const fn new(a: OctetRule, b: OctetRule, c: OctetRule, d: OctetRule) -> CidrRule {
        CidrRule { a, b, c, d }
    }

    pub fn get(&self, name: OctetName) -> OctetRule {
        match name {
            OctetName::A => self.a,
            OctetName::B => self.b,
            OctetName::C => self.c,
            OctetName::D => self.d,
        }
    }

    /// The four rules paired with their octet name, in `a,b,c,d` order.
    pub fn octets(&self) -> [(OctetName, OctetRule); 4] {
        OctetName::ALL.map(|name| (name, self.get(name)))
    }

    /// True when every octet of `addr` passes its rule.
    pub fn accepts(&self, addr: [u8; 4]) -> bool {
        self.octets()
            .iter()
            .all(|(name, rule)| rule.accepts(addr[name.index()]))
    }
}
