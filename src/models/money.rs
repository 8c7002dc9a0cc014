//! Money type for representing currency amounts
//!
//! Internally stores amounts in milli-units (i64), the same integer
//! subdivision YNAB uses on the wire. Decimal values only appear at the
//! edges: parsing user input, reading template values, and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Milli-units per whole currency unit
pub const MILLIS_PER_UNIT: i64 = 1000;

/// Represents a monetary amount stored as milli-units (thousandths of the
/// currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from milli-units
    ///
    /// # Examples
    /// ```
    /// use ynab_template::models::Money;
    /// let amount = Money::from_milliunits(10_500); // 10.50
    /// ```
    pub const fn from_milliunits(millis: i64) -> Self {
        Self(millis)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * MILLIS_PER_UNIT)
    }

    /// Create a Money amount from a decimal value, rounded to the nearest
    /// milli-unit
    ///
    /// Returns `None` for NaN, infinities, and values whose milli-unit amount
    /// does not fit in an `i64`.
    pub fn from_decimal(value: f64) -> Option<Self> {
        let millis = (value * MILLIS_PER_UNIT as f64).round();

        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        if millis.is_finite() && millis >= i64::MIN as f64 && millis < i64::MAX as f64 {
            Some(Self(millis as i64))
        } else {
            None
        }
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in milli-units
    pub const fn milliunits(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / MILLIS_PER_UNIT
    }

    /// Get the amount as a decimal value
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / MILLIS_PER_UNIT as f64
    }

    /// Drop the fractional part, truncating toward zero
    pub const fn truncate_to_units(&self) -> Self {
        Self::from_units(self.units())
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add, returning `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(millis) => Some(Self(millis)),
            None => None,
        }
    }

    /// Subtract, returning `None` on overflow
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(millis) => Some(Self(millis)),
            None => None,
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.125".
    /// Digits beyond the third decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Pad or truncate the fraction to three digits
        let mut digits: String = fraction.chars().take(3).collect();
        while digits.len() < 3 {
            digits.push('0');
        }
        let millis: i64 = digits.parse().map_err(|_| invalid())?;

        let total = units
            .checked_mul(MILLIS_PER_UNIT)
            .and_then(|u| u.checked_add(millis))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Formats as units with two decimal places, rounding half away from zero
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = (self.0.unsigned_abs() + 5) / 10;
        let sign = if self.is_negative() && cents > 0 { "-" } else { "" };
        let text = format!("{}{}.{:02}", sign, cents / 100, cents % 100);
        f.pad(&text)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let m = Money::from_units(12);
        assert_eq!(m.milliunits(), 12_000);
        assert_eq!(m.units(), 12);
    }

    #[test]
    fn test_from_decimal_rounds_to_milliunits() {
        assert_eq!(Money::from_decimal(200.0).unwrap().milliunits(), 200_000);
        assert_eq!(Money::from_decimal(0.1234).unwrap().milliunits(), 123);
        assert_eq!(Money::from_decimal(0.1236).unwrap().milliunits(), 124);
        assert_eq!(Money::from_decimal(-12.5).unwrap().milliunits(), -12_500);
    }

    #[test]
    fn test_from_decimal_rejects_unrepresentable() {
        assert_eq!(Money::from_decimal(f64::NAN), None);
        assert_eq!(Money::from_decimal(f64::INFINITY), None);
        assert_eq!(Money::from_decimal(f64::NEG_INFINITY), None);
        assert_eq!(Money::from_decimal(1e16), None);
        assert_eq!(Money::from_decimal(-1e16), None);
        assert!(Money::from_decimal(9e15).is_some());
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = Money::from_milliunits(i64::MAX - 1);
        assert_eq!(
            big.checked_add(Money::from_milliunits(1)),
            Some(Money::from_milliunits(i64::MAX))
        );
        assert_eq!(big.checked_add(Money::from_units(1)), None);
        assert_eq!(Money::from_milliunits(i64::MIN).checked_sub(Money::from_milliunits(1)), None);
        assert_eq!(
            Money::from_units(10).checked_sub(Money::from_units(25)),
            Some(Money::from_units(-15))
        );
    }

    #[test]
    fn test_truncate_to_units() {
        assert_eq!(Money::from_milliunits(2_000_999).truncate_to_units(), Money::from_units(2000));
        assert_eq!(Money::from_milliunits(-1_500).truncate_to_units(), Money::from_units(-1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_units(600).to_string(), "600.00");
        assert_eq!(Money::from_units(-300).to_string(), "-300.00");
        assert_eq!(Money::from_milliunits(10_505).to_string(), "10.51");
        assert_eq!(Money::from_milliunits(10_504).to_string(), "10.50");
        assert_eq!(Money::from_milliunits(-4).to_string(), "0.00");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("{:>8}", Money::from_units(5)), "    5.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(10);
        let b = Money::from_units(5);

        assert_eq!((a + b).units(), 15);
        assert_eq!((a - b).units(), 5);
        assert_eq!((-a).units(), -10);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().milliunits(), 10_500);
        assert_eq!(Money::parse("$10.50").unwrap().milliunits(), 10_500);
        assert_eq!(Money::parse("-10.50").unwrap().milliunits(), -10_500);
        assert_eq!(Money::parse("2000").unwrap().milliunits(), 2_000_000);
        assert_eq!(Money::parse("10.125").unwrap().milliunits(), 10_125);
        assert_eq!(Money::parse("10.1259").unwrap().milliunits(), 10_125);
        assert_eq!(Money::parse(".5").unwrap().milliunits(), 500);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1e3").is_err());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_milliunits(10_500);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10500");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
