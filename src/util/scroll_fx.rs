//! Scroll-position math for the header and hero reactors.

#[cfg(test)]
#[path = "scroll_fx_test.rs"]
mod scroll_fx_test;

/// Scroll offset beyond which the header switches to its compact look.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Fraction of the scroll offset applied to the hero image.
pub const PARALLAX_SPEED: f64 = 0.5;

/// `true` once the page has scrolled strictly past the header threshold.
#[must_use]
pub fn header_scrolled(offset_y: f64) -> bool {
    offset_y > HEADER_SCROLL_THRESHOLD_PX
}

/// Vertical drift for the hero image, or `None` once the page has
/// scrolled a full viewport height. `None` means the last applied offset
/// stays in place rather than snapping back.
#[must_use]
pub fn parallax_translation(offset_y: f64, viewport_height: f64) -> Option<f64> {
    if offset_y < viewport_height {
        Some(offset_y * PARALLAX_SPEED)
    } else {
        None
    }
}
