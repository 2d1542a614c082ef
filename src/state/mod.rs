//! Shared page state provided through Leptos contexts.

pub mod catalog;
pub mod newsletter;
pub mod scroll;
pub mod theme;
pub mod ui;
