//! Browser-side utilities for the donation form: today's date for the date
//! field default and the blob-URL dance that turns receipt bytes into a file
//! download.

use wasm_bindgen::{JsCast, JsValue};

/// Today's date as `YYYY-MM-DD` (the first ten characters of the ISO string).
pub fn today_iso() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.chars().take(10).collect()
}

/// Starts a client-side download of the given PDF bytes by creating a Blob
/// object URL and clicking a synthetic anchor.
pub fn save_pdf_bytes(bytes: &[u8], file_name: &str) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
