//! File Reading & Encoded Image Helpers
//!
//! Wraps the browser `FileReader` in a future and keeps the two encoded
//! image formats straight: the catalog serves raw base64 payloads, while
//! local file reads produce full data URIs.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

/// Read a locally selected file into a `data:` URI.
///
/// Suspends until the browser finishes the read; the UI stays responsive.
/// Read errors resolve to `Err` rather than leaving the result undefined.
pub async fn read_as_data_url(file: &File) -> Result<String, String> {
    let reader = FileReader::new().map_err(|e| js_error_string(&e))?;

    let done = {
        let reader = reader.clone();
        js_sys::Promise::new(&mut move |resolve, reject| {
            reader.set_onload(Some(&resolve));
            reader.set_onerror(Some(&reject));
        })
    };

    reader
        .read_as_data_url(file)
        .map_err(|e| js_error_string(&e))?;
    JsFuture::from(done)
        .await
        .map_err(|_| "file could not be read".to_string())?;

    reader
        .result()
        .map_err(|e| js_error_string(&e))?
        .as_string()
        .ok_or_else(|| "file reader returned a non-text payload".to_string())
}

/// Whether an encoded string is a base64 image data URI.
///
/// File inputs only hint at MIME types; anything can be handed to us, so
/// non-image payloads get rejected here before reaching the draft.
pub fn is_image_data_url(encoded: &str) -> bool {
    match encoded.strip_prefix("data:image/") {
        Some(rest) => rest.contains(';') && rest.contains(','),
        None => false,
    }
}

/// `src` attribute value for an encoded image string.
///
/// Data URIs pass through; raw base64 payloads (the catalog wire format)
/// get the JPEG data-URI prefix.
pub fn image_src(encoded: &str) -> String {
    if encoded.starts_with("data:") {
        encoded.to_string()
    } else {
        format!("data:image/jpeg;base64,{}", encoded)
    }
}

fn js_error_string(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_data_url_accepted() {
        assert!(is_image_data_url("data:image/png;base64,iVBORw0KGgo="));
        assert!(is_image_data_url("data:image/jpeg;base64,/9j/4AAQ"));
    }

    #[test]
    fn test_non_image_payloads_rejected() {
        assert!(!is_image_data_url("data:text/plain;base64,aGVsbG8="));
        assert!(!is_image_data_url("data:application/pdf;base64,JVBERg=="));
        assert!(!is_image_data_url("iVBORw0KGgo="));
        assert!(!is_image_data_url(""));
    }

    #[test]
    fn test_image_src_passes_data_uris_through() {
        let uri = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(image_src(uri), uri);
    }

    #[test]
    fn test_image_src_wraps_raw_base64() {
        assert_eq!(
            image_src("iVBORw0KGgo="),
            "data:image/jpeg;base64,iVBORw0KGgo="
        );
    }
}
