//! # Product
//!
//! A purchasable item: name, unit price and quantity, plus its line total.
//!
//! ```text
//! ┌─────────────────────────────┐
//! │          Product            │
//! │  ─────────────────────────  │
//! │  name      "Knife"          │
//! │  price     Money(258)       │
//! │  quantity  2                │
//! │  ─────────────────────────  │
//! │  line_total()  Money(516)   │
//! └─────────────────────────────┘
//! ```
//!
//! Fields are private and the line total is computed once, at
//! construction: a `Product` whose price × quantity does not fit in `i64`
//! cents is never built.

use serde::Serialize;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_line_total, validate_price, validate_product_name};

/// A purchasable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    name: String,
    price: Money,
    quantity: u32,
    #[serde(skip)]
    line_total: Money,
}

impl Product {
    /// Creates a product after validating its name and price.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Money, Product};
    ///
    /// let knife = Product::new("Knife", Money::from_cents(258), 2).unwrap();
    /// assert_eq!(knife.line_total().cents(), 516);
    ///
    /// assert!(Product::new("Knife", Money::from_cents(-1), 2).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> CoreResult<Self> {
        let name = name.into();

        validate_product_name(&name).map_err(|source| invalid(&name, source))?;
        validate_price(price).map_err(|source| invalid(&name, source))?;
        let line_total =
            validate_line_total(price, quantity).map_err(|source| invalid(&name, source))?;

        Ok(Product {
            name,
            price,
            quantity,
            line_total,
        })
    }

    /// Creates a product from decimal price text such as `"2.58"`.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::Product;
    ///
    /// let stick = Product::parse("Stick", "5.11", 4).unwrap();
    /// assert_eq!(stick.formatted_total(), "20.44");
    /// ```
    pub fn parse(name: impl Into<String>, price: &str, quantity: u32) -> CoreResult<Self> {
        let name = name.into();
        let price: Money = price.parse().map_err(|source| invalid(&name, source))?;
        Product::new(name, price, quantity)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity. Zero when either factor is zero.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.line_total
    }

    /// Line total with two decimals and no grouping, e.g. `"5.16"`.
    pub fn formatted_total(&self) -> String {
        self.line_total().to_plain_string()
    }
}

fn invalid(name: &str, source: ValidationError) -> CoreError {
    CoreError::InvalidProduct {
        name: name.to_string(),
        source,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
