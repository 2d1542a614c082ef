//! Theme loading, application, and persistence.
//!
//! Reads the persisted preference at startup, keeps the `dark-mode` class
//! on `<body>` in sync, and writes the preference back on every toggle.
//! Outside `csr` builds the class application is a no-op so the logic
//! stays testable.

#[cfg(test)]
#[path = "theme_mode_test.rs"]
mod theme_mode_test;

use crate::state::theme::Theme;
use crate::util::prefs::PreferenceStore;

/// `localStorage` key holding the theme preference.
pub const STORAGE_KEY: &str = "vitrina_theme";

/// CSS class marking dark mode on `<body>`.
pub const MODE_CLASS: &str = "dark-mode";

/// Read the persisted theme. Absent or unrecognized values are light.
pub fn load(store: &impl PreferenceStore) -> Theme {
    store
        .load(STORAGE_KEY)
        .map_or(Theme::Light, |raw| Theme::from_stored(&raw))
}

/// Persist `theme` under the fixed key.
pub fn persist(store: &impl PreferenceStore, theme: Theme) {
    store.save(STORAGE_KEY, theme.as_stored());
}

/// Add or remove the mode class on `<body>` to match `theme`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
        else {
            return;
        };
        let _ = body.class_list().toggle_with_force(MODE_CLASS, theme.is_dark());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply the mode class, and persist the new value.
pub fn toggle(store: &impl PreferenceStore, current: Theme) -> Theme {
    let next = current.flipped();
    apply(next);
    persist(store, next);
    next
}
