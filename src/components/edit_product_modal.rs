//! Edit Product Modal
//!
//! Modal editor over a locally owned draft of an externally supplied
//! product. The draft is replaced wholesale whenever the product changes
//! (even while the modal is hidden) and on every closed-to-open transition,
//! so cancelled edits never leak into the next session. Submitting hands
//! the full draft to the caller; closing is the caller's job.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::draft::{DraftField, ProductDraft};
use crate::files;
use crate::models::Product;
use crate::store::{store_push_notice, use_app_store};
use crate::task::TaskGuard;

/// Modal form for editing one product's fields, including its image
#[component]
pub fn EditProductModal(
    /// Externally owned product; any change replaces the draft
    product: ReadSignal<Product>,
    /// When false, nothing renders but resync still tracks the product
    is_open: ReadSignal<bool>,
    /// Dismiss without persisting
    #[prop(into)] on_close: Callback<()>,
    /// Receives the full draft; price is raw text, validation is the
    /// receiver's job
    #[prop(into)] on_submit: Callback<ProductDraft>,
) -> impl IntoView {
    let store = use_app_store();

    let (draft, set_draft) = signal(ProductDraft::default());
    // Display-only view of the draft's image. Derived, so the preview and
    // the draft can never show different images.
    let preview = Memo::new(move |_| draft.get().image.clone());

    // Guard for in-flight file reads
    let reads = StoredValue::new_local(TaskGuard::new());

    // Resync: replace the draft whenever the product changes, open or not.
    // Any in-flight file read belongs to the old draft and must not land.
    Effect::new(move |_| {
        let p = product.get();
        reads.with_value(|g| g.supersede());
        set_draft.set(ProductDraft::from_product(&p));
    });

    // Reopening always starts from the product as it is now, not from
    // whatever a cancelled session left behind.
    Effect::new(move |was_open: Option<bool>| {
        let open = is_open.get();
        if open && was_open == Some(false) {
            reads.with_value(|g| g.supersede());
            set_draft.set(ProductDraft::from_product(&product.get_untracked()));
        }
        open
    });

    // A read completing after unmount must not touch state
    on_cleanup(move || {
        reads.with_value(|g| g.supersede());
    });

    let edit_field = move |field: DraftField, ev: &web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let value = input.value();
        set_draft.update(|d| d.set_field(field, value));
    };

    let on_image_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let file = input.files().and_then(|list| list.get(0));
        let Some(file) = file else {
            // Selection cancelled; nothing changes
            return;
        };

        // Supersede any earlier read; only the newest selection may apply
        let (guard, token) = reads.with_value(|g| (g.clone(), g.supersede()));
        spawn_local(async move {
            match files::read_as_data_url(&file).await {
                Ok(encoded) if files::is_image_data_url(&encoded) => {
                    if guard.accepts(token) {
                        set_draft.update(|d| d.set_image(encoded));
                    } else {
                        web_sys::console::log_1(&"[EDIT] discarding stale image read".into());
                    }
                }
                Ok(_) => {
                    if guard.accepts(token) {
                        store_push_notice(&store, "Selected file is not an image");
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[EDIT] image read failed: {}", err).into());
                    if guard.accepts(token) {
                        store_push_notice(&store, format!("Could not read image: {}", err));
                    }
                }
            }
        });
    };

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(draft.get_untracked());
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay">
                <div class="modal">
                    <h2 class="modal-title">"Edit Product"</h2>
                    <form on:submit=handle_submit>
                        <div class="form-field">
                            <label class="form-label">"Image"</label>
                            <input
                                type="file"
                                accept="image/*"
                                class="form-input"
                                on:change=on_image_change
                            />
                            <Show when=move || !preview.get().is_empty()>
                                <img
                                    class="image-preview"
                                    src=move || files::image_src(&preview.get())
                                    alt="Image preview"
                                />
                            </Show>
                        </div>
                        <div class="form-field">
                            <label class="form-label">"Name"</label>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="Enter name of product"
                                prop:value=move || draft.get().name
                                on:input=move |ev| edit_field(DraftField::Name, &ev)
                            />
                        </div>
                        <div class="form-field">
                            <label class="form-label">"Price"</label>
                            <input
                                type="number"
                                class="form-input"
                                placeholder="Enter price"
                                prop:value=move || draft.get().price
                                on:input=move |ev| edit_field(DraftField::Price, &ev)
                            />
                        </div>
                        <div class="form-field">
                            <label class="form-label">"Category"</label>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="Enter category"
                                prop:value=move || draft.get().category
                                on:input=move |ev| edit_field(DraftField::Category, &ev)
                            />
                        </div>
                        <div class="form-actions">
                            <button
                                type="button"
                                class="cancel-btn"
                                on:click=move |_| on_close.run(())
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="save-btn">"Save"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
