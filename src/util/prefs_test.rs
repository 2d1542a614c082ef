#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn absent_keys_read_as_none() {
    let store = MemoryStore::default();
    assert_eq!(store.load("theme"), None);
}

#[test]
fn saved_values_read_back() {
    let store = MemoryStore::default();
    store.save("theme", "dark");
    assert_eq!(store.load("theme"), Some("dark".to_owned()));
}

#[test]
fn save_overwrites_the_previous_value() {
    let store = MemoryStore::default();
    store.save("theme", "dark");
    store.save("theme", "light");
    assert_eq!(store.load("theme"), Some("light".to_owned()));
}

#[test]
fn keys_are_independent() {
    let store = MemoryStore::default();
    store.save("a", "1");
    store.save("b", "2");
    assert_eq!(store.load("a"), Some("1".to_owned()));
    assert_eq!(store.load("b"), Some("2".to_owned()));
}
