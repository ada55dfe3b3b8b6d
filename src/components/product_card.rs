//! Product Card Component
//!
//! Single catalog card: fixed-aspect image, truncated title (full text in
//! the title attribute), currency-prefixed price, and an add-to-cart button
//! that is not wired up in this slice.

use leptos::prelude::*;

use crate::files;
use crate::models::ProductSummary;

/// One card in the catalog grid
#[component]
pub fn ProductCard(card: ProductSummary) -> impl IntoView {
    let ProductSummary { title, category, price, image } = card;

    view! {
        <div class="product-card">
            <img
                class="card-image"
                src=files::image_src(&image)
                alt=title.clone()
            />
            <div class="card-body">
                <h3 class="card-title" title=title.clone()>{title.clone()}</h3>
                <h4 class="card-category">{category}</h4>
                <p class="card-price">{format!("₹{}", price)}</p>
                <button class="add-to-cart-btn" type="button">"Add to cart"</button>
            </div>
        </div>
    }
}
