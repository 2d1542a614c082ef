//! Root component: shared state contexts and the storefront page.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::pages::storefront::StorefrontPage;
use crate::state::catalog::CatalogState;
use crate::state::newsletter::NewsletterState;
use crate::state::scroll::ScrollState;
use crate::state::ui::UiState;

/// Application root. Provides every shared state signal, restores the
/// persisted theme, and renders the storefront.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let catalog = RwSignal::new(CatalogState::with_demo_products());
    let scroll = RwSignal::new(ScrollState::default());
    let newsletter = RwSignal::new(NewsletterState::default());

    provide_context(ui);
    provide_context(catalog);
    provide_context(scroll);
    provide_context(newsletter);

    #[cfg(feature = "csr")]
    {
        use crate::util::prefs::BrowserStore;
        use crate::util::theme_mode;

        let theme = theme_mode::load(&BrowserStore);
        theme_mode::apply(theme);
        ui.update(|u| u.set_theme(theme));
    }

    view! {
        <Title text="Vitrina Fresh Market" />
        <Meta name="description" content="Neighborhood grocery storefront with daily offers." />
        <StorefrontPage />
    }
}
