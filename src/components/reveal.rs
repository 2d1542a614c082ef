//! Wrapper registering its contents with the shared reveal observer.

use leptos::prelude::*;

/// Wraps a card so it fades in the first time it scrolls into view.
/// Without an observer in context (headless builds, missing API) the
/// contents simply render visible.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        use crate::util::reveal::SharedRevealObserver;

        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            let Some(shared) = use_context::<SharedRevealObserver>() else {
                return;
            };
            shared.with_value(|observer| {
                if let Some(observer) = observer {
                    observer.observe(&el);
                }
            });
        });
    }

    view! { <div class="reveal" node_ref=node>{children()}</div> }
}
