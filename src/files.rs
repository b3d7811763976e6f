//! Browser File Glue
//!
//! Reading files picked in an `<input type="file">` and handing downloaded
//! content back to the browser.

use dms_api::{FileContent, UploadFile};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlInputElement, Url};

/// Files currently chosen in a file input, in selection order.
pub fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

pub async fn read_upload(file: &File) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("failed to read {}: {:?}", file.name(), e))?;
    let mime = file.type_();
    Ok(UploadFile {
        name: file.name(),
        mime: (!mime.is_empty()).then_some(mime),
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

/// Wraps the content in a Blob and opens its object URL in a new tab.
pub fn open_in_new_tab(content: &FileContent) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let parts = Array::of1(&Uint8Array::from(content.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(content.mime());
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    window.open_with_url_and_target(&url, "_blank")?;
    Ok(())
}

pub fn print_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.print() {
            log::warn!("print failed: {:?}", e);
        }
    }
}
