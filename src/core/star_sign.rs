//! Birthday to star sign classification
//!
//! Dates are encoded as `month * 256 + day` so every sign's span becomes a
//! single inclusive integer range. Capricorn straddles the new year and is
//! listed twice.

use crate::core::error::{CompatError, Result};
use crate::core::models::{Birthday, StarSign};
use std::ops::RangeInclusive;

const fn encode(month: u32, day: u32) -> u32 {
    (month << 8) | day
}

/// (first day, last day, sign), in calendar order
const STAR_SIGN_RANGES: [((u32, u32), (u32, u32), StarSign); 13] = [
    ((1, 1), (1, 19), StarSign::Capricorn),
    ((1, 20), (2, 18), StarSign::Aquarius),
    ((2, 19), (3, 20), StarSign::Pisces),
    ((3, 21), (4, 19), StarSign::Aries),
    ((4, 20), (5, 20), StarSign::Taurus),
    ((5, 21), (6, 20), StarSign::Gemini),
    ((6, 21), (7, 22), StarSign::Cancer),
    ((7, 23), (8, 22), StarSign::Leo),
    ((8, 23), (9, 22), StarSign::Virgo),
    ((9, 23), (10, 22), StarSign::Libra),
    ((10, 23), (11, 21), StarSign::Scorpio),
    ((11, 22), (12, 21), StarSign::Sagittarius),
    ((12, 22), (12, 31), StarSign::Capricorn),
];

fn encoded_range(start: (u32, u32), end: (u32, u32)) -> RangeInclusive<u32> {
    encode(start.0, start.1)..=encode(end.0, end.1)
}

/// Star sign for a (month, day) pair.
///
/// Returns [`CompatError::InvalidDate`] when the pair lies outside every
/// range. Days above 31 are rejected before encoding so they cannot spill
/// into the following month's range.
pub fn classify(month: u32, day: u32) -> Result<StarSign> {
    if day == 0 || day > 31 {
        return Err(CompatError::InvalidDate { month, day });
    }
    let encoded = encode(month, day);
    STAR_SIGN_RANGES
        .iter()
        .find(|(start, end, _)| encoded_range(*start, *end).contains(&encoded))
        .map(|(_, _, sign)| *sign)
        .ok_or(CompatError::InvalidDate { month, day })
}

impl Birthday {
    pub fn star_sign(&self) -> Result<StarSign> {
        classify(self.month(), self.day())
    }
}
