//! Storefront UI components.

pub mod header;
pub mod hero;
pub mod newsletter;
pub mod offers;
pub mod products;
pub mod reveal;
pub mod services;
pub mod testimonials;
