//! Exact decimal money amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MINOR_PER_MAJOR: i64 = 100;

/// A money amount with two fractional digits, stored as minor units.
///
/// Arithmetic is checked integer arithmetic: sums are exact, do not depend on
/// the order the amounts are added in, and report overflow instead of
/// wrapping.
///
/// ```rust
/// use statefold::checkout::Price;
///
/// let eggs: Price = "1.00".parse().unwrap();
/// let fish: Price = "168.50".parse().unwrap();
///
/// assert_eq!(eggs.checked_add(fish).unwrap().to_string(), "169.50");
/// assert_eq!(fish.checked_add(eggs), eggs.checked_add(fish));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price is empty")]
    Empty,

    #[error("'{0}' is not a decimal amount")]
    Malformed(String),

    #[error("'{0}' has more than two fractional digits")]
    TooPrecise(String),

    #[error("'{0}' is out of range")]
    OutOfRange(String),

    #[error("total exceeds the largest representable price")]
    Overflow,
}

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_minor_units(minor: i64) -> Self {
        Price(minor)
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }

    /// Sum `prices`, or `None` if the total does not fit.
    pub fn checked_sum<I>(prices: I) -> Option<Price>
    where
        I: IntoIterator<Item = Price>,
    {
        prices
            .into_iter()
            .try_fold(Price::ZERO, |total, price| total.checked_add(price))
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let text = input.trim();
        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(PriceError::Empty);
        }
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !digits(whole) || !digits(fraction) {
            return Err(PriceError::Malformed(text.to_string()));
        }
        if fraction.len() > 2 {
            return Err(PriceError::TooPrecise(text.to_string()));
        }

        let out_of_range = || PriceError::OutOfRange(text.to_string());
        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        let minor: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| out_of_range())? * 10,
            _ => fraction.parse().map_err(|_| out_of_range())?,
        };

        major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .map(Price)
            .ok_or_else(out_of_range)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = MINOR_PER_MAJOR.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / per, abs % per)
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
