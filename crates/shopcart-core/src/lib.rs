//! # shopcart-core: Pure Cart Model
//!
//! A `Cart` accumulates `Product`s, keeps a running total and renders its
//! contents. Everything here is pure: no I/O, no global state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        shopcart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 shopcart-demo (binary)                          │   │
//! │  │    config ──► tracing ──► build cart ──► print HTML / JSON      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopcart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  product  │  │   cart    │  │  render   │  │   │
//! │  │   │   Money   │  │  Product  │  │   Cart    │  │   HTML    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`product`] - Product value with its line total
//! - [`cart`] - `ShoppingCart` trait and the `Cart` aggregate
//! - [`render`] - HTML rendering of a cart
//! - [`error`] - Domain error types
//! - [`validation`] - Product input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{Cart, Product, ShoppingCart};
//!
//! let mut cart = Cart::new();
//! cart.add_product(Product::parse("Knife", "2.58", 2)?)?;
//! cart.add_product(Product::parse("Stick", "5.11", 4)?)?;
//!
//! assert_eq!(cart.total_formatted(), "25.60");
//! assert_eq!(cart.checkout_url(), "https://www.instaProduct.com");
//! # Ok::<(), shopcart_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod product;
pub mod render;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartSummary, ShoppingCart};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Where every cart sends the customer to pay.
pub const CHECKOUT_URL: &str = "https://www.instaProduct.com";

/// Maximum length of a product name, in characters.
pub const MAX_NAME_LENGTH: usize = 200;
