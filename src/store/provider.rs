//! Product provider module
//!
//! The Data Provider seam: handlers ask for the full product sequence and
//! never see where it came from.

use serde::Deserialize;
use std::path::PathBuf;

use super::{Product, StoreError};

/// Supplies the product sequence on demand
///
/// Implementations are read-only; a failing provider propagates its error
/// and the current request answers with a generic server error.
pub trait ProductProvider: Send + Sync {
    fn list_all(&self) -> Result<Vec<Product>, StoreError>;
}

/// Catalog file shape: a `[[products]]` array of tables
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
}

/// Catalog backed by a TOML file
///
/// The file is read on every call, so catalog edits show up without a
/// restart and provider failures stay observable at request time.
pub struct TomlCatalog {
    path: PathBuf,
}

impl TomlCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductProvider for TomlCatalog {
    fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        let raw = std::fs::read_to_string(&self.path).map_err(StoreError::Unavailable)?;
        let catalog: CatalogFile = toml::from_str(&raw).map_err(StoreError::Malformed)?;
        Ok(catalog.products)
    }
}

/// Fixed in-memory catalog, used by tests
#[derive(Debug, Default, Clone)]
pub struct MemoryCatalog {
    products: Vec<Product>,
}

impl MemoryCatalog {
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl ProductProvider for MemoryCatalog {
    fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_catalog_parses_products() {
        let dir = std::env::temp_dir().join("storefront-catalog-parse");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("products.toml");
        std::fs::write(
            &path,
            r#"
[[products]]
name = "Mechanical Keyboard"
description = "Tenkeyless, brown switches"
price_cents = 8999

[[products]]
name = "Mouse Pad"
price_cents = 499
"#,
        )
        .unwrap();

        let catalog = TomlCatalog::new(&path);
        let products = catalog.list_all().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Mechanical Keyboard");
        assert_eq!(products[1].description, "");
        assert_eq!(products[1].price_cents, 499);
    }

    #[test]
    fn test_toml_catalog_empty_file_is_empty_sequence() {
        let dir = std::env::temp_dir().join("storefront-catalog-empty");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("products.toml");
        std::fs::write(&path, "").unwrap();

        let products = TomlCatalog::new(&path).list_all().unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_toml_catalog_missing_file_is_unavailable() {
        let catalog = TomlCatalog::new("/definitely/not/here/products.toml");
        match catalog.list_all() {
            Err(StoreError::Unavailable(_)) => {}
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_toml_catalog_rejects_malformed_input() {
        let dir = std::env::temp_dir().join("storefront-catalog-bad");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("products.toml");
        std::fs::write(&path, "[[products]]\nname = 42\n").unwrap();

        match TomlCatalog::new(&path).list_all() {
            Err(StoreError::Malformed(_)) => {}
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_memory_catalog_returns_fixed_products() {
        let catalog = MemoryCatalog::new(vec![Product {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price_cents: 100,
        }]);
        let products = catalog.list_all().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Widget");
    }
}
