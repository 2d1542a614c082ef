//! Newsletter signup form with the transient success acknowledgement.

use leptos::prelude::*;

use crate::state::newsletter::NewsletterState;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

/// Signup form. A valid submission flashes the success state for a fixed
/// window; an invalid one changes nothing. Resubmitting during the
/// window restarts it.
#[component]
pub fn NewsletterForm() -> impl IntoView {
    let news = expect_context::<RwSignal<NewsletterState>>();

    // Pending revert; replacing it restarts the window, owner disposal
    // cancels it.
    #[cfg(feature = "csr")]
    let revert = StoredValue::new_local(None::<Timeout>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let accepted = news.try_update(NewsletterState::submit).unwrap_or(false);
        if !accepted {
            return;
        }
        #[cfg(feature = "csr")]
        {
            use crate::state::newsletter::ACK_REVERT_MS;

            revert.set_value(Some(Timeout::new(ACK_REVERT_MS, move || {
                news.update(NewsletterState::revert_ack);
            })));
        }
    };

    let subscribed = move || news.get().is_subscribed();

    view! {
        <form class="newsletter-form" on:submit=on_submit>
            <input
                type="email"
                placeholder="you@example.com"
                aria-label="Email address"
                prop:value=move || news.get().email
                on:input=move |ev| news.update(|s| s.email = event_target_value(&ev))
            />
            <button type="submit" class:subscribed=subscribed>
                {move || if subscribed() { "✓ Subscribed!" } else { "Subscribe" }}
            </button>
        </form>
    }
}
