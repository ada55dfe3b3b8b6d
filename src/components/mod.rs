//! UI Components
//!
//! Reusable Leptos components.

mod catalog_feed;
mod edit_product_modal;
mod notice_bar;
mod product_card;

pub use catalog_feed::CatalogFeed;
pub use edit_product_modal::EditProductModal;
pub use notice_bar::NoticeBar;
pub use product_card::ProductCard;
