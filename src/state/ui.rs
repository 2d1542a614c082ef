//! Page chrome state: active theme and the mobile navigation menu.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::theme::Theme;

/// Mobile navigation menu, toggled by the hamburger button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// The other state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Chrome state shared through context with the header and its toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub menu: MenuState,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggled();
    }

    /// Force the menu closed. Safe to call when already closed.
    pub fn close_menu(&mut self) {
        self.menu = MenuState::Closed;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
