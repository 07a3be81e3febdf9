//! # shopcart Demo
//!
//! Builds the sample cart (two knives, four sticks) and renders it.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Load config ─────► SHOPCART_FORMAT, RUST_LOG                        │
//! │  2. Init tracing ────► tracing-subscriber, EnvFilter, stderr            │
//! │  3. Build cart ──────► Knife 2.58 × 2, Stick 5.11 × 4                   │
//! │  4. Render ──────────► HTML page or JSON summary on stdout              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;

use shopcart_core::render::render_checkout_page;
use shopcart_core::{Cart, Product, ShoppingCart};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{DemoConfig, OutputFormat};
use error::DemoResult;

/// Products added by the demo, as (name, price, quantity).
const SAMPLE_PRODUCTS: &[(&str, &str, u32)] = &[("Knife", "2.58", 2), ("Stick", "5.11", 4)];

/// Loads config, installs logging and returns the rendered cart.
pub fn run() -> DemoResult<String> {
    let config = DemoConfig::load()?;
    init_tracing(&config);

    info!(format = ?config.format, "Starting shopcart demo");

    let cart = build_sample_cart()?;
    info!(
        items = cart.item_count(),
        total = %cart.total(),
        "Sample cart built"
    );

    render(&cart, config.format)
}

/// Initializes tracing; log lines go to stderr so stdout stays clean.
fn init_tracing(config: &DemoConfig) {
    let filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Builds the sample cart.
pub fn build_sample_cart() -> DemoResult<Cart> {
    let mut cart = Cart::new();
    for (name, price, quantity) in SAMPLE_PRODUCTS {
        cart.add_product(Product::parse(*name, price, *quantity)?)?;
    }
    Ok(cart)
}

/// Renders a cart in the requested format.
pub fn render(cart: &Cart, format: OutputFormat) -> DemoResult<String> {
    match format {
        OutputFormat::Html => Ok(render_checkout_page(cart)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&cart.summary())?),
    }
}
