//! Light/dark theme preference value.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme for the whole page.
///
/// Persisted as `"light"` / `"dark"`; anything else read back from the
/// store is treated as light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted value. Only the exact string `"dark"` is dark.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    /// The value written to the preference store.
    #[must_use]
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Glyph shown on the toggle button: dark mode shows the sun, light
    /// mode shows the moon.
    #[must_use]
    pub fn icon_glyph(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}
