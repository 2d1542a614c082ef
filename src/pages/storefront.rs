//! The single storefront page: scroll wiring plus section layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installs the page-wide scroll listener and the shared reveal observer,
//! then lays the sections out in nav order. All interactive state lives
//! in contexts provided by [`crate::app::App`].

use leptos::prelude::*;

use crate::components::header::SiteHeader;
use crate::components::hero::Hero;
use crate::components::newsletter::NewsletterForm;
use crate::components::offers::OffersSection;
use crate::components::products::ProductsSection;
use crate::components::services::ServicesSection;
use crate::components::testimonials::TestimonialsSection;

#[component]
pub fn StorefrontPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        use crate::state::scroll::ScrollState;
        use crate::util::reveal::{RevealObserver, SharedRevealObserver};
        use crate::util::scroll::install_scroll_listener;

        let scroll = expect_context::<RwSignal<ScrollState>>();
        // Arena-held so leaving the page removes the window listener and
        // disconnects the observer.
        let _listener = StoredValue::new_local(install_scroll_listener(scroll));
        let shared: SharedRevealObserver = StoredValue::new_local(RevealObserver::install());
        provide_context(shared);
    }

    view! {
        <SiteHeader />
        <main>
            <Hero />
            <ProductsSection />
            <OffersSection />
            <ServicesSection />
            <TestimonialsSection />
            <section id="contact" class="contact">
                <h2>"Stay in touch"</h2>
                <p>"Weekly offers and seasonal picks, straight to your inbox."</p>
                <NewsletterForm />
            </section>
        </main>
        <footer class="site-footer">
            <p>"Vitrina Fresh Market, your neighborhood grocery."</p>
        </footer>
    }
}
