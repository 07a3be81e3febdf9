//! # Demo Error Type
//!
//! Everything that can stop the demo from printing a cart.

use shopcart_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cart error: {0}")]
    Core(#[from] CoreError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DemoResult<T> = Result<T, DemoError>;
