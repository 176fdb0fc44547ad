//! Multipart encoding for `POST /products`.

use base64::{Engine as _, engine::general_purpose};
use wasm_bindgen::JsValue;
use web_sys::FormData;

use common::requests::product::{IMAGE_FIELD, IMAGE_FILENAME, NewProduct};

/// Serializes the payload into browser form-data and attaches the captured
/// photo as a typed JPEG part. The browser fills in the multipart boundary
/// itself, so no content-type header is set on the request.
pub fn encode_product_form(payload: &NewProduct, photo_base64: &str) -> Result<FormData, String> {
    let form = FormData::new().map_err(describe)?;
    for (name, value) in payload.form_fields() {
        form.append_with_str(name, &value).map_err(describe)?;
    }
    let bytes = general_purpose::STANDARD
        .decode(photo_base64)
        .map_err(|err| err.to_string())?;
    let blob = gloo_file::Blob::new_with_options(bytes.as_slice(), Some("image/jpeg"));
    form.append_with_blob_and_filename(IMAGE_FIELD, blob.as_ref(), IMAGE_FILENAME)
        .map_err(describe)?;
    Ok(form)
}

fn describe(err: JsValue) -> String {
    format!("{err:?}")
}
