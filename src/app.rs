//! Storefront Frontend App
//!
//! Thin shell around the two edge components: the catalog feed and the
//! product editor. The app owns one demo product to exercise the editor;
//! real callers supply their own product and handle the submitted draft.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CatalogFeed, EditProductModal, NoticeBar};
use crate::draft::ProductDraft;
use crate::models::Product;
use crate::store::{store_push_notice, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    // Product under edit, owned here; the modal only ever sees a copy
    let (product, set_product) = signal(Product {
        id: 1,
        name: "Classic Tee".to_string(),
        price: 499.0,
        category: "Apparel".to_string(),
        image: String::new(),
    });
    let (editor_open, set_editor_open) = signal(false);

    // Price arrives as raw text; coercion happens here, at the receiver
    let on_submit = move |draft: ProductDraft| {
        match draft.price_value() {
            Some(price) => {
                web_sys::console::log_1(&format!("[APP] product {} edited", draft.id).into());
                set_product.update(|p| {
                    p.name = draft.name.clone();
                    p.price = price;
                    p.category = draft.category.clone();
                    p.image = draft.image.clone();
                });
                set_editor_open.set(false);
            }
            None => {
                store_push_notice(&store, format!("\"{}\" is not a valid price", draft.price));
            }
        }
    };

    view! {
        <div class="app-layout">
            <NoticeBar />
            <main class="main-content">
                <h1>"Storefront"</h1>
                <button
                    class="edit-product-btn"
                    on:click=move |_| set_editor_open.set(true)
                >
                    {move || format!("Edit \"{}\"", product.get().name)}
                </button>
                <CatalogFeed />
            </main>
            <EditProductModal
                product=product
                is_open=editor_open
                on_close=move |_| set_editor_open.set(false)
                on_submit=on_submit
            />
        </div>
    }
}
