//! Scroll-triggered reveal: one shared `IntersectionObserver` fades
//! registered elements in the first time they enter the viewport.
//!
//! Targets are primed hidden when registered and revealed exactly once;
//! after the transition the element is unobserved and keeps its final
//! state, so scrolling back up never re-hides it.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Fraction of a target that must be visible to trigger its reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin pulling the trigger line 50px up from the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Inline styles priming a hidden target.
pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Inline styles for a revealed target.
pub const VISIBLE_STYLE: [(&str, &str); 2] =
    [("opacity", "1"), ("transform", "translateY(0)")];

#[cfg(feature = "csr")]
pub use browser::{RevealObserver, SharedRevealObserver};

#[cfg(feature = "csr")]
mod browser {
    use leptos::prelude::{LocalStorage, StoredValue};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use super::{HIDDEN_STYLE, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, VISIBLE_STYLE};

    /// Handle to the page's shared observer, passed through context.
    /// `None` inside means the observer could not be created.
    pub type SharedRevealObserver = StoredValue<Option<RevealObserver>, LocalStorage>;

    /// Page-wide reveal observer.
    pub struct RevealObserver {
        observer: web_sys::IntersectionObserver,
        // Kept alive for as long as the observer can fire.
        _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
    }

    impl RevealObserver {
        /// Create the observer. `None` outside a browser.
        #[must_use]
        pub fn install() -> Option<Self> {
            let callback = Closure::wrap(Box::new(
                |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) =
                            entry.dyn_into::<web_sys::IntersectionObserverEntry>()
                        else {
                            continue;
                        };
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        apply_styles(&target, &VISIBLE_STYLE);
                        observer.unobserve(&target);
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            options.set_root_margin(REVEAL_ROOT_MARGIN);

            let observer = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

            Some(Self { observer, _callback: callback })
        }

        /// Prime `el` hidden and start watching it.
        pub fn observe(&self, el: &web_sys::Element) {
            apply_styles(el, &HIDDEN_STYLE);
            self.observer.observe(el);
        }
    }

    impl Drop for RevealObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    fn apply_styles(el: &web_sys::Element, styles: &[(&str, &str)]) {
        let Ok(el) = el.clone().dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let style = el.style();
        for (name, value) in styles {
            let _ = style.set_property(name, value);
        }
    }
}
