//! Integer money type in smallest currency units.
//!
//! All kiosk arithmetic is done on whole cents, so accumulation and
//! change-making never touch floating point. `rust_decimal` is used only
//! at the display boundary to render exact two-decimal dollar amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseIntError;
use std::ops::{Add, AddAssign, Div, Rem, Sub};
use std::str::FromStr;

/// An amount of money in cents.
///
/// Non-negative by construction (wraps `u64`), ordered, and displayed as
/// dollars with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use parking_kiosk::Cents;
///
/// let fee = Cents::new(400);
/// assert_eq!(fee.to_string(), "4.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Cents(u64);

impl Cents {
    /// Zero value.
    pub const ZERO: Self = Cents(0);

    /// Creates an amount from a whole number of cents.
    pub const fn new(cents: u64) -> Self {
        Cents(cents)
    }

    /// Returns the raw cent count.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Returns `true` if this amount is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtracts `rhs`, saturating at zero.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Cents(self.0.saturating_sub(rhs.0))
    }

    /// Renders the amount as an exact decimal dollar value.
    fn as_dollars(self) -> Decimal {
        Decimal::new(self.0 as i64, 2)
    }
}

impl FromStr for Cents {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Cents)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_dollars())
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Cents {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Cents(self.0 - rhs.0)
    }
}

impl Div for Cents {
    type Output = u64;

    /// Whole number of times `rhs` fits into `self`.
    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

impl Rem for Cents {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        Cents(self.0 % rhs.0)
    }
}

impl Serialize for Cents {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for Cents {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Cents)
    }
}
