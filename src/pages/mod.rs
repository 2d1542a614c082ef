//! Page-level composition.

pub mod storefront;
