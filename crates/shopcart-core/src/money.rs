//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64 prices:                                                       │
//! │    2.58 * 2 + 5.11 * 4 = 25.599999999999998  ❌                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    258 * 2 + 511 * 4 = 2560 cents = "25.60"  ✅                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::money::Money;
//!
//! let price: Money = "2.58".parse().unwrap();
//! assert_eq!(price.cents(), 258);
//!
//! let line_total = price.checked_multiply_quantity(2).unwrap();
//! assert_eq!(line_total.to_plain_string(), "5.16");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: the type can hold negatives; `Product` refuses them
/// - **Checked arithmetic only**: overflow is reported as `None`, never
///   wrapped or panicked on
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serde**: serialized as the raw cent count
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► Product.line_total() ──► Cart.total
///      │                    │                    │
///      ▼                    ▼                    ▼
///  "$1,234.50"           "$5.16"              "25.60"
///  (grouped)             (plain)              (plain)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity, or `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(511); // $5.11
    /// assert_eq!(unit_price.checked_multiply_quantity(4), Some(Money::from_cents(2044)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: u32) -> Option<Self> {
        match self.0.checked_mul(qty as i64) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Two decimals, `.` separator, no grouping: `"1234.50"`.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(123450).to_plain_string(), "1234.50");
    /// assert_eq!(Money::from_cents(510).to_plain_string(), "5.10");
    /// ```
    pub fn to_plain_string(&self) -> String {
        format!(
            "{}{}.{:02}",
            self.sign(),
            self.0.unsigned_abs() / 100,
            self.0.unsigned_abs() % 100
        )
    }

    /// Two decimals with `,` thousands grouping: `"1,234.50"`.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(123450).to_grouped_string(), "1,234.50");
    /// assert_eq!(Money::from_cents(258).to_grouped_string(), "2.58");
    /// ```
    pub fn to_grouped_string(&self) -> String {
        format!(
            "{}{}.{:02}",
            self.sign(),
            group_thousands(self.0.unsigned_abs() / 100),
            self.0.unsigned_abs() % 100
        )
    }

    fn sign(&self) -> &'static str {
        if self.0 < 0 {
            "-"
        } else {
            ""
        }
    }
}

/// Inserts `,` every three digits from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `"2.58"`, `"5.1"`, `"3"` or `"-0.50"`.
///
/// ## Rules
/// - Optional leading `-`
/// - At most two fractional digits (no silent rounding)
/// - Digits only, no grouping separators
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (major, minor) = match body.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (body, ""),
        };

        if major.is_empty() && minor.is_empty() {
            return Err(invalid_price("must contain at least one digit"));
        }
        if !major.chars().chain(minor.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid_price("must contain only digits and one '.'"));
        }
        if minor.len() > 2 {
            return Err(invalid_price("must have at most two decimal places"));
        }

        let major: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| invalid_price("is out of range"))?
        };
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| invalid_price("is out of range"))? * 10,
            _ => minor.parse().map_err(|_| invalid_price("is out of range"))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid_price("is out of range"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

fn invalid_price(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Currency display: `$25.60`, `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}${}.{:02}",
            self.sign(),
            self.0.unsigned_abs() / 100,
            self.0.unsigned_abs() % 100
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(2560).to_string(), "$25.60");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-$0.05");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_plain_string_always_two_decimals() {
        assert_eq!(Money::from_cents(510).to_plain_string(), "5.10");
        assert_eq!(Money::from_cents(0).to_plain_string(), "0.00");
        assert_eq!(Money::from_cents(7).to_plain_string(), "0.07");
        assert_eq!(Money::from_cents(100_000_000).to_plain_string(), "1000000.00");
        assert_eq!(
            Money::from_cents(i64::MAX).to_plain_string(),
            "92233720368547758.07"
        );
    }

    #[test]
    fn test_grouped_string() {
        assert_eq!(Money::from_cents(99_999).to_grouped_string(), "999.99");
        assert_eq!(Money::from_cents(100_000).to_grouped_string(), "1,000.00");
        assert_eq!(
            Money::from_cents(123_456_789).to_grouped_string(),
            "1,234,567.89"
        );
        assert_eq!(Money::from_cents(-123_450).to_grouped_string(), "-1,234.50");
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!("2.58".parse::<Money>().unwrap().cents(), 258);
        assert_eq!("5.1".parse::<Money>().unwrap().cents(), 510);
        assert_eq!("3".parse::<Money>().unwrap().cents(), 300);
        assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("0".parse::<Money>().unwrap().cents(), 0);
        assert_eq!(" 12.00 ".parse::<Money>().unwrap().cents(), 1200);
        assert_eq!("-0.50".parse::<Money>().unwrap().cents(), -50);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "".parse::<Money>(),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            "2.585".parse::<Money>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!("1,000.00".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_checked_multiply_quantity() {
        let price = Money::from_cents(258);
        assert_eq!(price.checked_multiply_quantity(2), Some(Money::from_cents(516)));
        assert_eq!(price.checked_multiply_quantity(0), Some(Money::zero()));

        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_multiply_quantity(1), Some(max));
        assert_eq!(max.checked_multiply_quantity(2), None);

        let half = Money::from_cents(i64::MAX / 2);
        assert_eq!(half.checked_multiply_quantity(2), Some(Money::from_cents(i64::MAX - 1)));
        assert_eq!(Money::from_cents(i64::MAX / 2 + 1).checked_multiply_quantity(2), None);
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(516);
        let b = Money::from_cents(2044);
        assert_eq!(a.checked_add(b), Some(Money::from_cents(2560)));

        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_add(Money::zero()), Some(max));
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(2560)).unwrap();
        assert_eq!(json, "2560");
        let back: Money = serde_json::from_str("516").unwrap();
        assert_eq!(back, Money::from_cents(516));
    }

    /// With f64 this sum is 25.599999999999998; integer cents stay exact.
    #[test]
    fn test_no_float_drift() {
        let knives = Money::from_cents(258).checked_multiply_quantity(2).unwrap();
        let sticks = Money::from_cents(511).checked_multiply_quantity(4).unwrap();
        assert_eq!(knives.checked_add(sticks).unwrap().to_plain_string(), "25.60");
    }
}
