//! Pure logic and browser glue, kept apart.
//!
//! SYSTEM CONTEXT
//! ==============
//! Modules with no `cfg` gate compile and test headlessly; the scroll
//! listener and the browser halves of `prefs`/`reveal` only exist in
//! `csr` builds.

pub mod email;
pub mod prefs;
pub mod price;
pub mod reveal;
#[cfg(feature = "csr")]
pub mod scroll;
pub mod scroll_fx;
pub mod search;
pub mod theme_mode;
