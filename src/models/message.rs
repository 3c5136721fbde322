//! Localizable validation messages.
//!
//! Validators never build display text. They emit a [`Message`]: a
//! [`MessageId`] naming the lexicon entry plus the positional arguments the
//! entry interpolates. Rendering is done by a [`crate::locale::Localizer`].

use serde::Serialize;
use std::fmt;

/// Identifies one entry of the message lexicon.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MessageId {
    /// The value is not a usable IPv4 address.
    Ipv4Invalid,
    /// The value is not a usable IPv6 address.
    Ipv6Invalid,
    /// No `/` separates the address from the prefix length.
    CidrMissingRange,
    /// The prefix length is not an integer in `0..=32`.
    CidrRangeOutOfBounds,
    /// Args: octet name.
    CidrOctetMustBeZero,
    /// Args: octet name, list of legal values.
    CidrOctetOneOf,
    /// Args: octet name, min, max.
    CidrOctetRange,
    /// Args: octet name, divisor.
    CidrOctetDivisible,
    /// Args: address, prefix.
    CidrUnsupported,
}

/// One positional argument of a [`Message`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum MessageArg {
    Text(String),
    Number(u32),
    List(Vec<String>),
}

impl fmt::Display for MessageArg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MessageArg::Text(s) => write!(f, "{s}"),
            MessageArg::Number(n) => write!(f, "{n}"),
            MessageArg::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<&str> for MessageArg {
    fn from(s: &str) -> Self {
        MessageArg::Text(s.to_string())
    }
}

impl From<u8> for MessageArg {
    fn from(n: u8) -> Self {
        MessageArg::Number(u32::from(n))
    }
}

impl From<&[u8]> for MessageArg {
    fn from(values: &[u8]) -> Self {
        MessageArg::List(values.iter().map(|v| v.to_string()).collect())
    }
}

/// A lexicon key plus its interpolation arguments.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub args: Vec<MessageArg>,
}

impl Message {
    /// A message that takes no arguments.
    pub fn new(id: MessageId) -> Message {
        Message { id, args: vec![] }
    }

    /// Append one positional argument.
    pub fn arg<A: Into<MessageArg>>(mut self, arg: A) -> Message {
        self.args.push(arg.into());
        self
    }
}

impl From<MessageId> for Message {
    fn from(id: MessageId) -> Self {
        Message::new(id)
    }
}
