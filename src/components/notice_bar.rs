//! Notice Bar Component
//!
//! Renders the transient notice queue from the app store. Notices
//! auto-dismiss (scheduled when pushed) but can also be dismissed by hand.

use leptos::prelude::*;

use crate::store::{store_remove_notice, use_app_store, AppStateStoreFields};

/// Stack of transient notices
#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notice-bar">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let notice_id = notice.id;
                    view! {
                        <div class="notice">
                            <span class="notice-message">{notice.message.clone()}</span>
                            <button
                                class="notice-dismiss"
                                on:click=move |_| store_remove_notice(&store, notice_id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
