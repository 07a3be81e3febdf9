//! # Cart
//!
//! An ordered collection of products with a running total.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Caller                   Cart method              State change         │
//! │  ──────                   ───────────              ────────────         │
//! │                                                                         │
//! │  Product::new ──────────► add_product()? ────────► total += line_total │
//! │                                                    items.push(product)  │
//! │                                                                         │
//! │  Show total ────────────► total_formatted() ─────► (read only)         │
//! │                                                                         │
//! │  Show items ────────────► list_products() ───────► (read only)         │
//! │                                                                         │
//! │  Checkout ──────────────► checkout_url() ────────► (constant)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `total` equals the sum of `line_total()` over `items`, maintained on
//!   every add and never recomputed
//! - `total` always fits in `i64` cents; an add that would overflow it is
//!   refused and leaves the cart unchanged
//! - `items` keep insertion order
//! - There is no removal; a cart only grows

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::Product;
use crate::render::escape_html;
use crate::CHECKOUT_URL;

// =============================================================================
// ShoppingCart Trait
// =============================================================================

/// The capabilities every cart offers.
///
/// `Cart` is the only implementation; callers that just need to add items
/// and check out can be written against this trait.
pub trait ShoppingCart {
    /// Adds a product and updates the running total.
    ///
    /// Fails with `CoreError::CartTotalOverflow`, leaving the cart
    /// unchanged, when the new total would not fit.
    fn add_product(&mut self, product: Product) -> CoreResult<()>;

    /// Running total of all line totals.
    fn total(&self) -> Money;

    /// Where the customer is sent to pay.
    fn checkout_url(&self) -> &str;
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Product>,
    total: Money,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Running total with two decimals and no grouping, e.g. `"25.60"`.
    pub fn total_formatted(&self) -> String {
        self.total.to_plain_string()
    }

    /// One display row per product, in insertion order.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Cart, Product, ShoppingCart};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_product(Product::parse("Knife", "2.58", 2).unwrap()).unwrap();
    ///
    /// let lines = cart.list_products();
    /// assert_eq!(lines[0].unit_price, "$2.58");
    /// assert_eq!(lines[0].line_total, "$5.16");
    /// ```
    pub fn list_products(&self) -> Vec<CartLine> {
        self.lines().collect()
    }

    /// Lazy form of [`Cart::list_products`].
    pub fn lines(&self) -> impl Iterator<Item = CartLine> + '_ {
        self.items.iter().map(CartLine::from)
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.items
    }

    /// Number of products added.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all products.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|p| u64::from(p.quantity())).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot for serialization.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }
}

impl ShoppingCart for Cart {
    /// The new total is computed before either field is written; nothing
    /// between the two writes can fail.
    fn add_product(&mut self, product: Product) -> CoreResult<()> {
        let line_total = product.line_total();
        let Some(new_total) = self.total.checked_add(line_total) else {
            warn!(
                name = product.name(),
                line_total_cents = line_total.cents(),
                total_cents = self.total.cents(),
                "Cart total would overflow, product not added"
            );
            return Err(CoreError::CartTotalOverflow {
                total_cents: self.total.cents(),
                line_total_cents: line_total.cents(),
            });
        };

        debug!(
            name = product.name(),
            quantity = product.quantity(),
            line_total_cents = line_total.cents(),
            total_cents = new_total.cents(),
            "Product added to cart"
        );

        self.items.push(product);
        self.total = new_total;
        Ok(())
    }

    fn total(&self) -> Money {
        self.total
    }

    fn checkout_url(&self) -> &str {
        CHECKOUT_URL
    }
}

// =============================================================================
// Display Rows
// =============================================================================

/// A product rendered for display.
///
/// `name` is HTML-escaped; prices carry a `$` symbol. The unit price uses
/// thousands grouping, the line total does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        CartLine {
            name: escape_html(product.name()),
            unit_price: format!("${}", product.price().to_grouped_string()),
            quantity: product.quantity(),
            line_total: format!("${}", product.formatted_total()),
        }
    }
}

/// Cart snapshot for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub item_count: usize,
    pub total_quantity: u64,
    pub total_cents: i64,
    pub total_formatted: String,
    pub checkout_url: String,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            lines: cart.list_products(),
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total().cents(),
            total_formatted: cart.total_formatted(),
            checkout_url: cart.checkout_url().to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
