//! Fixed page header: brand, section nav, menu toggle, theme toggle.
//!
//! DESIGN
//! ======
//! The header derives its compact look from the shared scroll signal and
//! owns the mobile menu state machine. Nav links smooth-scroll to their
//! section and always force the menu closed, so a tap on a link never
//! leaves the overlay open.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::scroll::ScrollState;
use crate::state::ui::UiState;
use crate::util::scroll_fx::header_scrolled;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

/// Sections reachable from the nav menu, as `(element id, label)`.
pub const NAV_SECTIONS: [(&str, &str); 4] = [
    ("products", "Products"),
    ("offers", "Offers"),
    ("services", "Services"),
    ("contact", "Contact"),
];

/// Duration of the theme button spin, matching its CSS transition.
pub const THEME_SPIN_MS: u32 = 300;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let scroll = expect_context::<RwSignal<ScrollState>>();

    let scrolled = Memo::new(move |_| header_scrolled(scroll.get().offset_y));
    let menu_open = move || ui.get().menu.is_open();

    let nav_links = NAV_SECTIONS
        .into_iter()
        .map(|(section_id, label)| {
            view! {
                <li>
                    <a
                        href=format!("#{section_id}")
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            ui.update(UiState::close_menu);
                            #[cfg(feature = "csr")]
                            crate::util::scroll::smooth_scroll_to(section_id);
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header id="header" class="site-header" class:scrolled=move || scrolled.get()>
            <span class="site-header__brand">"Vitrina Fresh Market"</span>
            <nav class="site-header__nav">
                <ul class="nav-menu" class:active=menu_open>
                    {nav_links}
                </ul>
            </nav>
            <ThemeToggle />
            <button
                class="menu-toggle"
                class:active=menu_open
                on:click=move |_| ui.update(UiState::toggle_menu)
                aria-label="Toggle navigation menu"
            >
                "☰"
            </button>
        </header>
    }
}

/// Theme toggle button. Each click flips the theme, persists it, and
/// spins the button once.
#[component]
fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let spinning = RwSignal::new(false);

    // Pending spin reset; replacing it cancels the previous timer, and
    // owner disposal cancels a leftover one.
    #[cfg(feature = "csr")]
    let spin_reset = StoredValue::new_local(None::<Timeout>);

    let on_toggle = move |_| {
        #[cfg(feature = "csr")]
        {
            use crate::util::prefs::BrowserStore;
            use crate::util::theme_mode;

            let next = theme_mode::toggle(&BrowserStore, ui.get().theme);
            ui.update(|u| u.set_theme(next));

            spinning.set(true);
            spin_reset
                .set_value(Some(Timeout::new(THEME_SPIN_MS, move || spinning.set(false))));
        }
        #[cfg(not(feature = "csr"))]
        {
            ui.update(|u| u.set_theme(u.theme.flipped()));
        }
    };

    view! {
        <button
            class="theme-toggle"
            title="Toggle light/dark theme"
            on:click=on_toggle
            style:transform=move || {
                if spinning.get() { "rotate(360deg)" } else { "rotate(0deg)" }
            }
        >
            <span class="theme-icon">{move || ui.get().theme.icon_glyph()}</span>
        </button>
    }
}
