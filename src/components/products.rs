//! Product section: search box plus the filterable card grid.
//!
//! DESIGN
//! ======
//! Cards are rendered once from the catalog; each card derives its own
//! visibility from the shared query signal. Filtering therefore mutates
//! display styles only and never rebuilds the grid.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::state::catalog::{CatalogState, Product};
use crate::util::price::format_usd;

#[component]
pub fn ProductsSection() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let cards = catalog
        .with_untracked(|c| c.products.clone())
        .into_iter()
        .map(|product| view! { <ProductCard product=product /> })
        .collect::<Vec<_>>();

    view! {
        <section id="products" class="products">
            <h2>"Products"</h2>
            <input
                class="search-input"
                type="search"
                placeholder="Search products..."
                aria-label="Search products"
                on:input=move |ev| {
                    catalog.update(|c| c.set_query(&event_target_value(&ev)));
                }
            />
            <div class="card-grid">{cards}</div>
        </section>
    }
}

/// One product card. Filtered-out cards stay mounted with
/// `display: none`; re-showing one replays its fade-in animation.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let matcher = product.clone();
    let visible = Memo::new(move |_| catalog.with(|c| matcher.matches(&c.query)));

    let price = format_usd(product.price);

    view! {
        <Reveal>
            <article
                class="product-card"
                style:display=move || if visible.get() { "block" } else { "none" }
                style:animation=move || {
                    if visible.get() { "fadeIn 0.3s ease" } else { "" }
                }
            >
                <p class="product-card__category">{product.category.clone()}</p>
                <h3 class="product-card__title">{product.title.clone()}</h3>
                <p class="product-card__description">{product.description.clone()}</p>
                <p class="product-card__price">{price}</p>
            </article>
        </Reveal>
    }
}
