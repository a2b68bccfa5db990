//! Lossless decimal numeric type backed by rust_decimal.
//!
//! Provides canonical parsing from strings, fixed-point integer decoding for
//! on-chain balances, and formatting without exponent notation.

use rust_decimal::Decimal as RustDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lossless decimal numeric type for currency amounts and prices.
///
/// Serializes to a JSON string so that no precision is lost on the wire.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Decimal(#[serde(with = "rust_decimal::serde::str")] RustDecimal);

/// Error decoding a fixed-point integer string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixedPointError {
    #[error("not an unsigned integer: {0:?}")]
    NotAnInteger(String),
    #[error("value {0} with {1} decimals does not fit a decimal")]
    OutOfRange(String, u32),
}

impl Decimal {
    /// Create a Decimal from a RustDecimal.
    pub fn new(value: RustDecimal) -> Self {
        Decimal(value)
    }

    /// Parse a Decimal from a string losslessly.
    ///
    /// # Errors
    /// Returns an error if the string is not a valid decimal number.
    pub fn from_str_canonical(s: &str) -> Result<Self, rust_decimal::Error> {
        RustDecimal::from_str(s).map(Decimal)
    }

    /// Decode an unsigned fixed-point integer string, e.g. a chain balance
    /// `"1500000"` with 6 decimals is `1.5`.
    pub fn from_fixed_point(raw: &str, decimals: u32) -> Result<Self, FixedPointError> {
        let raw = raw.trim();
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(FixedPointError::NotAnInteger(raw.to_string()));
        }
        let mantissa = raw
            .parse::<i128>()
            .map_err(|_| FixedPointError::OutOfRange(raw.to_string(), decimals))?;
        RustDecimal::try_from_i128_with_scale(mantissa, decimals)
            .map(|d| Decimal(d.normalize()))
            .map_err(|_| FixedPointError::OutOfRange(raw.to_string(), decimals))
    }

    /// Format the Decimal as a canonical string (no exponent notation).
    pub fn to_canonical_string(&self) -> String {
        // Use normalize() to remove trailing zeros, then format without exponent
        let normalized = self.0.normalize();
        format!("{}", normalized)
    }

    /// Get the underlying RustDecimal.
    pub fn inner(&self) -> RustDecimal {
        self.0
    }

    /// The additive identity (0).
    pub fn zero() -> Self {
        Decimal(RustDecimal::ZERO)
    }

    /// The multiplicative identity (1).
    pub fn one() -> Self {
        Decimal(RustDecimal::ONE)
    }

    /// Returns the value 100.
    pub fn hundred() -> Self {
        Decimal(RustDecimal::ONE_HUNDRED)
    }

    /// Returns true if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the value is < 0.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }

    /// Sum that sticks at the largest representable magnitude instead of
    /// overflowing.
    pub fn saturating_add(self, rhs: Decimal) -> Decimal {
        Decimal(self.0.saturating_add(rhs.0))
    }

    /// Product that sticks at the largest representable magnitude instead of
    /// overflowing.
    pub fn saturating_mul(self, rhs: Decimal) -> Decimal {
        Decimal(self.0.saturating_mul(rhs.0))
    }

    /// Clamp negative values to zero.
    pub fn non_negative(self) -> Self {
        if self.is_negative() {
            Decimal::zero()
        } else {
            self
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl FromStr for Decimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_canonical(s)
    }
}

impl From<RustDecimal> for Decimal {
    fn from(value: RustDecimal) -> Self {
        Decimal(value)
    }
}

impl From<Decimal> for RustDecimal {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Decimal(RustDecimal::from(value))
    }
}

// Arithmetic operations
impl std::ops::Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        Decimal(self.0 + rhs.0)
    }
}

impl std::ops::Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        Decimal(self.0 * rhs.0)
    }
}

/// Saturates at `RustDecimal::MAX` rather than panicking on overflow.
impl std::iter::Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::zero(), Decimal::saturating_add)
    }
}

impl<'a> std::iter::Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Decimal {
        iter.copied().sum()
    }
}
