//! Search text normalization and matching.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Normalize a raw search-box value: lowercase, then trim surrounding
/// whitespace.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase().trim().to_owned()
}

/// Case-insensitive substring containment. `query` must already be
/// lowercase; `field` is lowercased here.
#[must_use]
pub fn contains_query(field: &str, query: &str) -> bool {
    field.to_lowercase().contains(query)
}
