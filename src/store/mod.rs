//! Store module
//!
//! The product domain: the `Product` record, the provider abstraction that
//! decouples handlers from any particular persistence backend, and the
//! catalog implementations.

mod provider;

pub use provider::{MemoryCatalog, ProductProvider, TomlCatalog};

use serde::Deserialize;

/// A product as listed by the storefront
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in cents; integer keeps TOML round-trips exact
    pub price_cents: u64,
}

impl Product {
    /// Price formatted for display, e.g. `$12.34`
    pub fn display_price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

/// Provider failures; all of them surface as a generic 500 to the caller
#[derive(Debug)]
pub enum StoreError {
    /// The backing catalog could not be reached or read
    Unavailable(std::io::Error),
    /// The catalog was read but could not be parsed
    Malformed(toml::de::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(e) => write!(f, "product catalog unavailable: {e}"),
            Self::Malformed(e) => write!(f, "product catalog malformed: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}
