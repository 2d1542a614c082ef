#![cfg(not(feature = "csr"))]

use super::*;

use crate::state::theme::Theme;
use crate::util::prefs::{MemoryStore, PreferenceStore};

// =============================================================
// Loading
// =============================================================

#[test]
fn load_defaults_to_light_when_nothing_is_stored() {
    assert_eq!(load(&MemoryStore::default()), Theme::Light);
}

#[test]
fn load_reads_a_persisted_dark_preference() {
    let store = MemoryStore::default();
    store.save(STORAGE_KEY, "dark");
    assert_eq!(load(&store), Theme::Dark);
}

#[test]
fn load_treats_garbage_values_as_light() {
    let store = MemoryStore::default();
    store.save(STORAGE_KEY, "sepia");
    assert_eq!(load(&store), Theme::Light);
}

// =============================================================
// Toggling and persistence
// =============================================================

#[test]
fn toggle_flips_and_persists() {
    let store = MemoryStore::default();
    let next = toggle(&store, Theme::Light);
    assert_eq!(next, Theme::Dark);
    assert_eq!(store.load(STORAGE_KEY), Some("dark".to_owned()));
}

#[test]
fn toggle_twice_restores_the_original_preference() {
    let store = MemoryStore::default();
    let once = toggle(&store, Theme::Light);
    let twice = toggle(&store, once);
    assert_eq!(twice, Theme::Light);
    assert_eq!(store.load(STORAGE_KEY), Some("light".to_owned()));
}

#[test]
fn persisted_toggle_survives_a_reload() {
    let store = MemoryStore::default();
    toggle(&store, Theme::Light);
    // A fresh session reads the same store.
    assert_eq!(load(&store), Theme::Dark);
}

#[test]
fn apply_is_a_noop_headless() {
    apply(Theme::Dark);
    apply(Theme::Light);
}

#[test]
fn storage_key_is_stable() {
    assert_eq!(STORAGE_KEY, "vitrina_theme");
}
