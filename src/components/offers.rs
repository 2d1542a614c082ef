//! Weekly offers with pulsing discount badges.

#[cfg(test)]
#[path = "offers_test.rs"]
mod offers_test;

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::util::price::format_usd;

#[cfg(feature = "csr")]
use gloo_timers::callback::{Interval, Timeout};

/// Time between badge pulses.
pub const PULSE_EVERY_MS: u32 = 3_000;

/// How long a pulse holds the enlarged scale.
pub const PULSE_HOLD_MS: u32 = 300;

/// This week's offers, as `(badge, title, price)`.
pub const OFFERS: [(&str, &str, f64); 3] = [
    ("-20%", "Seasonal Fruit Basket", 12.9),
    ("-15%", "Fresh Pasta Bundle", 8.4),
    ("2x1", "Sparkling Water Six-Pack", 5.95),
];

#[component]
pub fn OffersSection() -> impl IntoView {
    let cards = OFFERS
        .into_iter()
        .map(|(badge, title, price)| {
            view! {
                <Reveal>
                    <article class="offer-card">
                        <OfferBadge label=badge />
                        <h3>{title}</h3>
                        <p class="offer-card__price">{format_usd(price)}</p>
                    </article>
                </Reveal>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="offers" class="offers">
            <h2>"Offers"</h2>
            <div class="card-grid">{cards}</div>
        </section>
    }
}

/// Discount badge that pulses on a fixed interval to draw the eye.
#[component]
fn OfferBadge(label: &'static str) -> impl IntoView {
    let pulsing = RwSignal::new(false);

    // Ticker and the in-flight release timer live in the owner's arena,
    // so unmounting the badge cancels both.
    #[cfg(feature = "csr")]
    {
        let release = StoredValue::new_local(None::<Timeout>);
        let ticker = Interval::new(PULSE_EVERY_MS, move || {
            pulsing.set(true);
            release
                .set_value(Some(Timeout::new(PULSE_HOLD_MS, move || pulsing.set(false))));
        });
        let _ticker = StoredValue::new_local(Some(ticker));
    }

    view! {
        <span
            class="offer-card__badge"
            style:transform=move || if pulsing.get() { "scale(1.1)" } else { "scale(1)" }
        >
            {label}
        </span>
    }
}
