//! Customer testimonials section.

use leptos::prelude::*;

use crate::components::reveal::Reveal;

const TESTIMONIALS: [(&str, &str); 2] = [
    ("Marta R.", "The produce is always fresh and the staff remember your name."),
    ("Diego L.", "Ordered by phone at nine, picked everything up by ten."),
];

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let cards = TESTIMONIALS
        .into_iter()
        .map(|(name, quote)| {
            view! {
                <Reveal>
                    <blockquote class="testimonial-card">
                        <p>{quote}</p>
                        <footer>{name}</footer>
                    </blockquote>
                </Reveal>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="testimonials" class="testimonials">
            <h2>"What our customers say"</h2>
            <div class="card-grid">{cards}</div>
        </section>
    }
}
