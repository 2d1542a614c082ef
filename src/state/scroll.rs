//! Window scroll telemetry shared through context.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Most recent window scroll measurements.
///
/// Fed by the page scroll listener in `csr` builds; stays at zero in
/// headless builds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Vertical scroll offset in CSS pixels.
    pub offset_y: f64,
    /// Inner viewport height in CSS pixels.
    pub viewport_height: f64,
}
