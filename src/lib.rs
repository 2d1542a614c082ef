//! # vitrina
//!
//! Client-side grocery storefront in Leptos. Scroll-reactive header,
//! mobile menu, live product filtering, persisted light/dark theme,
//! scroll-triggered card reveals, and a newsletter signup flow.
//!
//! Browser wiring (storage, scroll listeners, observers, timers) sits
//! behind the `csr` feature; with default features the crate compiles
//! headless so the state machines and helpers test without a browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
