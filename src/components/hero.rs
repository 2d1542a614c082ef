//! Hero banner with the parallax image reactor.

use leptos::prelude::*;

use crate::state::scroll::ScrollState;
use crate::util::scroll_fx::parallax_translation;

/// Top-of-page hero. The image drifts at half scroll speed while the
/// page is within the first viewport height, then holds its last offset.
#[component]
pub fn Hero() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let image_offset = RwSignal::new(0.0_f64);

    Effect::new(move || {
        let state = scroll.get();
        if let Some(offset) = parallax_translation(state.offset_y, state.viewport_height) {
            image_offset.set(offset);
        }
    });

    view! {
        <section id="home" class="hero">
            <div class="hero__copy">
                <h1>"Fresh groceries, around the corner"</h1>
                <p>"Produce, pantry staples, and daily offers from your neighborhood market."</p>
            </div>
            <div
                class="hero__image"
                aria-hidden="true"
                style:transform=move || format!("translateY({}px)", image_offset.get())
            >
                "🛒"
            </div>
        </section>
    }
}
