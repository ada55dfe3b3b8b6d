//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. App-wide state
//! here is just the notice queue; feed state and drafts are owned by their
//! components.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

/// How long a notice stays on screen before auto-dismissing
const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// A transient user-facing notice (recoverable errors, rejections)
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
}

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active notices, newest last
    pub notices: Vec<Notice>,
    /// Next notice ID to hand out
    pub next_notice_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Push a notice and schedule its auto-dismiss
pub fn store_push_notice(store: &AppStore, message: impl Into<String>) {
    let id = store.next_notice_id().get_untracked();
    store.next_notice_id().set(id + 1);
    store.notices().write().push(Notice {
        id,
        message: message.into(),
    });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        store_remove_notice(&store, id);
    });
}

/// Remove a notice from the store by ID
pub fn store_remove_notice(store: &AppStore, notice_id: u32) {
    store.notices().write().retain(|notice| notice.id != notice_id);
}
