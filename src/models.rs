//! Frontend Models
//!
//! Data structures matching the catalog service.

use serde::{Deserialize, Serialize};

/// Product record (matches the catalog service)
///
/// `image` is an encoded image string: either a full `data:` URI or a raw
/// base64 payload, depending on where it came from. `id` never changes
/// across edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}

/// Lightweight catalog card as returned by the product listing endpoint.
///
/// Summaries are display items only. They carry no id and are never turned
/// into editable drafts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub title: String,
    pub category: String,
    pub price: f64,
    pub image: String,
}
