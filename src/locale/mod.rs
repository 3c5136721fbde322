//! Message rendering.
//!
//! A [`Localizer`] turns a [`Message`] into display text. [`Maketext`] uses the
//! built-in English lexicon and the bracket notation of [`maketext`].

pub mod maketext;

use crate::models::{Message, MessageId};

pub trait Localizer {
    fn localize(&self, message: &Message) -> String;
}

/// English lexicon entry for `id`.
pub fn english_template(id: MessageId) -> &'static str {
    match id {
        MessageId::Ipv4Invalid | MessageId::Ipv6Invalid => {
            "You must specify a valid [asis,IP] address."
        }
        MessageId::CidrMissingRange => {
            "The [asis,CIDR] range must include a ‘/’ followed by the range."
        }
        MessageId::CidrRangeOutOfBounds => {
            "You must specify a valid [asis,CIDR] range between 0 and 32."
        }
        MessageId::CidrOctetMustBeZero => {
            "In an [asis,IP] address like [asis,a.b.c.d], the “[_1]” octet must be the value 0 for this CIDR range."
        }
        MessageId::CidrOctetOneOf => {
            "In an [asis,IP] address like [asis,a.b.c.d], the “[_1]” octet must be one of the values in: [list_or,_2]."
        }
        MessageId::CidrOctetRange => {
            "In an [asis,IP] address like [asis,a.b.c.d], the “[_1]” octet must be greater than or equal to “[_2]” and less than or equal to “[_3]”."
        }
        MessageId::CidrOctetDivisible => {
            "In an [asis,IP] address like [asis,a.b.c.d], the “[_1]” octet must be evenly divisible by “[_2]”."
        }
        MessageId::CidrUnsupported => {
            "The [asis,IP] address, [_1], in the [asis,CIDR] range is not supported for the range /[_2]."
        }
    }
}

/// English localizer.
#[derive(Debug, Default, Copy, Clone)]
pub struct Maketext;

impl Localizer for Maketext {
    fn localize(&self, message: &Message) -> String {
        maketext::interpolate(english_template(message.id), &message.args)
    }
}
