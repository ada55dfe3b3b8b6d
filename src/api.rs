//! Catalog Service Bindings
//!
//! Frontend bindings to the remote catalog service. The service is opaque to
//! this layer; everything surfaces as `Result<_, String>` for the caller to
//! display.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::models::ProductSummary;

/// Product listing endpoint. Read-only; no pagination, filter, or sort
/// parameters are sent.
const PRODUCTS_URL: &str = "/api/productservice/products";

/// Fetch the full product catalog once.
pub async fn fetch_products() -> Result<Vec<ProductSummary>, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let response = JsFuture::from(window.fetch_with_str(PRODUCTS_URL))
        .await
        .map_err(|e| js_error_string(&e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch returned a non-Response value".to_string())?;

    if !response.ok() {
        return Err(format!("catalog request failed: HTTP {}", response.status()));
    }

    let body = JsFuture::from(response.json().map_err(|e| js_error_string(&e))?)
        .await
        .map_err(|e| js_error_string(&e))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}

fn js_error_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
