//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopcart-core errors (this file)                                      │
//! │  ├── CoreError        - Product construction / cart total failures     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shopcart-demo errors (app)                                            │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → demo exit status                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Product` always has an in-range line total; the only cart failure is a
//! running total that would no longer fit in `i64` cents.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while building domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product could not be constructed.
    ///
    /// ## When This Occurs
    /// - The name is empty or too long
    /// - The price is negative
    /// - `Product::parse` received price text that is not a valid amount
    #[error("Invalid product '{name}': {source}")]
    InvalidProduct {
        name: String,
        #[source]
        source: ValidationError,
    },

    /// Adding a product would overflow the cart total.
    ///
    /// The cart is left unchanged when this is returned.
    #[error("Cart total overflow: total {total_cents} + line total {line_total_cents} cents")]
    CartTotalOverflow {
        total_cents: i64,
        line_total_cents: i64,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., malformed decimal amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
