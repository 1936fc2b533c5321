//! File downloads generated in the browser.
//!
//! The contents are wrapped in a `Blob`, exposed through an object URL and
//! handed to a temporary `<a download>` element that is clicked and removed
//! straight away. The object URL is revoked afterwards.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for DownloadError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DownloadError::Js(format!("{value:?}"))
    }
}

/// Offer `contents` to the user as a file named `file_name`.
pub fn trigger_download(file_name: &str, mime_type: &str, contents: &str) -> Result<(), DownloadError> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(DownloadError::NoWindow)?;
        let document = window.document().ok_or(DownloadError::NoDocument)?;
        let body = document.body().ok_or(DownloadError::NoBody)?;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let link = document
            .create_element("a")?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|element| DownloadError::Js(format!("not an anchor: {element:?}")))?;
        link.set_href(&url);
        link.set_download(file_name);

        body.append_child(&link)?;
        link.click();
        body.remove_child(&link)?;
        web_sys::Url::revoke_object_url(&url)?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!(
            "download of {file_name} ({mime_type}, {} bytes) skipped outside the browser",
            contents.len()
        );
        Ok(())
    }
}
