// ============================================================================
// Fixed-Point Price
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A limit price stored as `value x 10^4` in an i64.
///
/// Four decimal places of precision cover the two the event log carries
/// with room for finer ticks. Comparison is plain integer comparison, so
/// price ordering is exact: there is no floating-point drift anywhere in
/// the matching path.
///
/// # Example
/// ```
/// use matchbook::numeric::Price;
///
/// let a: Price = "10.50".parse().unwrap();
/// let b: Price = "10.5".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.raw_value(), 105_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Price(i64);

impl Price {
    /// Minor units per whole unit (10^4)
    pub const SCALE: i64 = 10_000;

    /// Zero price
    pub const ZERO: Self = Self(0);

    /// Create from a raw minor-unit value.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from an integer number of whole units.
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled value does not fit in i64.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// The raw minor-unit value (`price x 10^4`).
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Whole-unit part, truncated toward zero.
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Minor-unit remainder as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    // ========================================================================
    // Decimal boundary conversions
    // ========================================================================

    /// Convert from a `rust_decimal::Decimal`.
    ///
    /// Intended for the parse boundary only; the core never computes in
    /// `Decimal`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the value has more than four decimal places
    /// - `Overflow` if the scaled value does not fit in i64
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let scaled = d
            .checked_mul(Decimal::from(Self::SCALE))
            .ok_or(NumericError::Overflow)?;
        if !scaled.fract().is_zero() {
            return Err(NumericError::PrecisionLoss);
        }
        scaled.to_i64().map(Self).ok_or(NumericError::Overflow)
    }

    /// Convert to a `rust_decimal::Decimal` with four decimal places.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 4)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 && self.integer_part() == 0 {
            // -0.xxxx keeps its sign
            write!(f, "-0.{:04}", self.fractional_part())
        } else {
            write!(f, "{}.{:04}", self.integer_part(), self.fractional_part())
        }
    }
}

impl FromStr for Price {
    type Err = NumericError;

    /// Parse from decimal text, e.g. `"10.25"`, `"9"`, `"-0.5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = Decimal::from_str(s.trim()).map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal(d)
    }
}
