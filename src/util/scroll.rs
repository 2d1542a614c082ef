//! Window scroll wiring: the shared scroll listener and smooth anchor
//! scrolling.
//!
//! Everything here degrades to a silent no-op when an element or API is
//! unavailable; the page never fails over a missing scroll target.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::state::scroll::ScrollState;

/// Element id of the fixed page header.
pub const HEADER_ID: &str = "header";

/// Keeps the window scroll listener registered. Dropping it removes the
/// listener.
pub struct ScrollListener {
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Current vertical scroll offset in CSS pixels.
#[must_use]
pub fn scroll_offset() -> f64 {
    web_sys::window().and_then(|w| w.page_y_offset().ok()).unwrap_or(0.0)
}

/// Current inner viewport height in CSS pixels.
#[must_use]
pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn measure() -> ScrollState {
    ScrollState { offset_y: scroll_offset(), viewport_height: viewport_height() }
}

/// Install the window scroll listener feeding `scroll`, seeding it with
/// the current measurements. `None` outside a browser.
pub fn install_scroll_listener(scroll: RwSignal<ScrollState>) -> Option<ScrollListener> {
    let window = web_sys::window()?;
    scroll.set(measure());

    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        scroll.set(measure());
    }) as Box<dyn FnMut(web_sys::Event)>);

    window
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        .ok()?;

    Some(ScrollListener { closure })
}

/// Smooth-scroll the window to the section with id `section_id`,
/// compensating for the fixed header's height. Unknown targets are
/// ignored.
pub fn smooth_scroll_to(section_id: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(target) = document.get_element_by_id(section_id) else { return };
    let Ok(target) = target.dyn_into::<web_sys::HtmlElement>() else { return };

    let header_height = document
        .get_element_by_id(HEADER_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map_or(0.0, |el| f64::from(el.offset_height()));

    let options = web_sys::ScrollToOptions::new();
    options.set_top(f64::from(target.offset_top()) - header_height);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
