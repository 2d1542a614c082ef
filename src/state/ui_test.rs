use super::*;

use crate::state::theme::Theme;

// =============================================================
// Menu state machine
// =============================================================

#[test]
fn menu_starts_closed() {
    let state = UiState::default();
    assert_eq!(state.menu, MenuState::Closed);
    assert!(!state.menu.is_open());
}

#[test]
fn toggling_alternates_open_and_closed() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert_eq!(state.menu, MenuState::Open);
    state.toggle_menu();
    assert_eq!(state.menu, MenuState::Closed);
}

#[test]
fn close_menu_collapses_an_open_menu() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu.is_open());
    state.close_menu();
    assert_eq!(state.menu, MenuState::Closed);
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = UiState::default();
    state.close_menu();
    state.close_menu();
    assert_eq!(state.menu, MenuState::Closed);
}

// =============================================================
// Theme field
// =============================================================

#[test]
fn theme_defaults_to_light() {
    assert_eq!(UiState::default().theme, Theme::Light);
}

#[test]
fn set_theme_overwrites_the_current_theme() {
    let mut state = UiState::default();
    state.set_theme(Theme::Dark);
    assert_eq!(state.theme, Theme::Dark);
    state.set_theme(Theme::Light);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn theme_and_menu_change_independently() {
    let mut state = UiState::default();
    state.set_theme(Theme::Dark);
    state.toggle_menu();
    assert_eq!(state.theme, Theme::Dark);
    assert!(state.menu.is_open());
    state.close_menu();
    assert_eq!(state.theme, Theme::Dark);
}
