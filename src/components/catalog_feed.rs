//! Catalog Feed Component
//!
//! Fetches the product catalog once per mount and renders exactly one of:
//! a loading indicator, the card grid, or an inline error message.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ProductCard;
use crate::feed::FeedState;
use crate::task::TaskGuard;

/// Scrollable product carousel backed by the catalog service
#[component]
pub fn CatalogFeed() -> impl IntoView {
    let (feed, set_feed) = signal(FeedState::Loading);
    let fetches = TaskGuard::new();

    // One fetch per mount. The effect tracks no signals, so re-renders
    // triggered by unrelated state never re-run it.
    {
        let fetches = fetches.clone();
        Effect::new(move |_| {
            let token = fetches.issue();
            let fetches = fetches.clone();
            spawn_local(async move {
                let outcome = api::fetch_products().await;
                if !fetches.accepts(token) {
                    web_sys::console::log_1(&"[FEED] discarding fetch for unmounted feed".into());
                    return;
                }
                match &outcome {
                    Ok(cards) => {
                        web_sys::console::log_1(&format!("[FEED] loaded {} products", cards.len()).into());
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("[FEED] catalog fetch failed: {}", err).into());
                    }
                }
                set_feed.set(FeedState::from_result(outcome));
            });
        });
    }

    // A completion landing after unmount must not touch state
    on_cleanup(move || {
        fetches.supersede();
    });

    view! {
        <section class="catalog-feed">
            {move || match feed.get() {
                FeedState::Loading => view! {
                    <div class="feed-loading">
                        <span class="spinner"></span>
                        "Loading products..."
                    </div>
                }.into_any(),
                FeedState::Loaded(cards) => view! {
                    <div class="card-grid">
                        {cards.into_iter().map(|card| view! {
                            <ProductCard card=card />
                        }).collect_view()}
                    </div>
                }.into_any(),
                FeedState::Failed(message) => view! {
                    <div class="feed-error">{message}</div>
                }.into_any(),
            }}
        </section>
    }
}
