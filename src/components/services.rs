//! Store services section.

use leptos::prelude::*;

use crate::components::reveal::Reveal;

const SERVICES: [(&str, &str); 3] = [
    ("Home Delivery", "Same-day delivery on orders placed before noon."),
    ("Fresh Daily", "Produce and bakery restocked every morning."),
    ("Phone Orders", "Call or message us and pick your order up ready."),
];

#[component]
pub fn ServicesSection() -> impl IntoView {
    let cards = SERVICES
        .into_iter()
        .map(|(title, blurb)| {
            view! {
                <Reveal>
                    <article class="service-card">
                        <h3>{title}</h3>
                        <p>{blurb}</p>
                    </article>
                </Reveal>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="services" class="services">
            <h2>"Services"</h2>
            <div class="card-grid">{cards}</div>
        </section>
    }
}
