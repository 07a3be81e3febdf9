//! # Validation Module
//!
//! Input validation for product construction.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Types                                                        │
//! │  ├── quantity is u32 → negative quantities cannot be expressed         │
//! │  └── price is Money (integer cents) → no NaN / infinity                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── name: non-empty, bounded length                                   │
//! │  ├── price: not negative                                               │
//! │  └── price × quantity: fits in i64 cents                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Product::new → Cart::add_product (checked running total)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::money::Money;
//! use shopcart_core::validation::{validate_price, validate_product_name};
//!
//! assert!(validate_product_name("Knife").is_ok());
//! assert!(validate_price(Money::from_cents(258)).is_ok());
//! assert!(validate_price(Money::from_cents(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most `MAX_NAME_LENGTH` characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Computes price × quantity, rejecting a line total that overflows.
///
/// ## Example
/// ```rust
/// use shopcart_core::money::Money;
/// use shopcart_core::validation::validate_line_total;
///
/// assert_eq!(validate_line_total(Money::from_cents(258), 2), Ok(Money::from_cents(516)));
/// assert!(validate_line_total(Money::from_cents(i64::MAX), 2).is_err());
/// ```
pub fn validate_line_total(price: Money, quantity: u32) -> ValidationResult<Money> {
    price
        .checked_multiply_quantity(quantity)
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "line total is out of range".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Knife").is_ok());
        assert!(validate_product_name("Fish & Chips <large>").is_ok());

        assert_eq!(
            validate_product_name("   "),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(validate_product_name(&"A".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(validate_product_name(&"A".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_line_total_bounds() {
        let largest = Money::from_cents(i64::MAX / 2);
        assert_eq!(
            validate_line_total(largest, 2),
            Ok(Money::from_cents(i64::MAX - 1))
        );

        let err = validate_line_total(Money::from_cents(i64::MAX / 2 + 1), 2).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: "line total is out of range".to_string(),
            }
        );

        assert_eq!(
            validate_line_total(Money::from_cents(i64::MAX), 0),
            Ok(Money::zero())
        );
    }
}
