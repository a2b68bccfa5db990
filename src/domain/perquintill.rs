//! Fixed-point ratio in `[0, 1]` with a 10^18 denominator.

use crate::domain::Decimal;
use rust_decimal::Decimal as RustDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parts per quintillion. Used for the share of an order a solution executes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Perquintill(u64);

impl Perquintill {
    /// Number of parts in a whole.
    pub const ACCURACY: u64 = 1_000_000_000_000_000_000;
    const SCALE: u32 = 18;

    pub fn zero() -> Self {
        Perquintill(0)
    }

    pub fn one() -> Self {
        Perquintill(Self::ACCURACY)
    }

    /// Build from raw parts, saturating at one.
    pub fn from_parts(parts: u64) -> Self {
        Perquintill(parts.min(Self::ACCURACY))
    }

    /// Build from a whole percentage, saturating at 100.
    pub fn from_percent(percent: u64) -> Self {
        Perquintill(percent.min(100) * (Self::ACCURACY / 100))
    }

    /// Raw parts per quintillion.
    pub fn deconstruct(&self) -> u64 {
        self.0
    }

    /// The exact fraction as a decimal.
    pub fn to_fraction(&self) -> Decimal {
        Decimal::new(RustDecimal::from_i128_with_scale(self.0 as i128, Self::SCALE).normalize())
    }

    /// The exact percentage as a decimal, e.g. `80` for 0.8.
    pub fn to_percent(&self) -> Decimal {
        self.to_fraction() * Decimal::hundred()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Perquintill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.to_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_from_percent() {
        assert_eq!(Perquintill::from_percent(0), Perquintill::zero());
        assert_eq!(Perquintill::from_percent(100), Perquintill::one());
        assert_eq!(
            Perquintill::from_percent(75).deconstruct(),
            750_000_000_000_000_000
        );
        assert_eq!(Perquintill::from_percent(250), Perquintill::one());
    }

    #[test]
    fn test_from_parts_saturates() {
        assert_eq!(Perquintill::from_parts(u64::MAX), Perquintill::one());
        assert_eq!(Perquintill::from_parts(1).deconstruct(), 1);
    }

    #[test]
    fn test_to_fraction_and_percent() {
        let p = Perquintill::from_percent(75);
        assert_eq!(p.to_fraction(), dec("0.75"));
        assert_eq!(p.to_percent(), dec("75"));
        assert_eq!(p.to_string(), "75%");
        assert_eq!(Perquintill::from_parts(1).to_fraction(), dec("0.000000000000000001"));
    }

    #[test]
    fn test_serializes_as_raw_parts() {
        let json = serde_json::to_value(Perquintill::from_percent(50)).unwrap();
        assert_eq!(json, serde_json::json!(500_000_000_000_000_000u64));
    }
}
