//! Product catalog contents and the live search query.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Deserialize;

use crate::util::search;

/// Demo products rendered into the grid at startup.
const DEMO_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// One product card's data.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
}

impl Product {
    /// Case-insensitive substring match against title, category, and
    /// description. `query` must already be normalized (see
    /// [`search::normalize_query`]); an empty query matches everything.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty()
            || search::contains_query(&self.title, query)
            || search::contains_query(&self.category, query)
            || search::contains_query(&self.description, query)
    }
}

/// Catalog contents plus the normalized search query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    /// Trimmed, lowercased query; empty means unfiltered.
    pub query: String,
}

impl CatalogState {
    /// Catalog pre-loaded with the embedded demo products.
    #[must_use]
    pub fn with_demo_products() -> Self {
        Self { products: demo_catalog(), query: String::new() }
    }

    /// Store the normalized form of a raw search-box value.
    pub fn set_query(&mut self, raw: &str) {
        self.query = search::normalize_query(raw);
    }
}

/// Parse the embedded catalog. A malformed file logs a warning and leaves
/// the grid empty rather than failing the mount.
#[must_use]
pub fn demo_catalog() -> Vec<Product> {
    match serde_json::from_str(DEMO_CATALOG_JSON) {
        Ok(products) => products,
        Err(err) => {
            log::warn!("demo catalog failed to parse: {err}");
            Vec::new()
        }
    }
}
