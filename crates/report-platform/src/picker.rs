//! Click-to-browse uploads through a detached `<input type="file">`.

use async_trait::async_trait;
use futures::channel::oneshot;
use js_sys::Uint8Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use report_core::ports::FilePickerPort;
use report_types::{file::FileUpload, ChatError, Result};

use crate::api::http::js_error;

pub struct BrowserFilePicker;

#[async_trait(?Send)]
impl FilePickerPort for BrowserFilePicker {
    async fn pick(&self, accepted_extensions: &[String]) -> Result<Vec<FileUpload>> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ChatError::JsInterop("No document".to_string()))?;
        let input: HtmlInputElement = document
            .create_element("input")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|e| js_error(e.into()))?;
        input.set_type("file");
        input.set_multiple(true);
        input.set_accept(&accept_attribute(accepted_extensions));

        // Fires once on either "change" or "cancel".
        let (tx, rx) = oneshot::channel::<()>();
        let mut tx = Some(tx);
        let done = Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.take() {
                let _ = tx.send(());
            }
        });
        input.set_onchange(Some(done.as_ref().unchecked_ref()));
        input
            .add_event_listener_with_callback("cancel", done.as_ref().unchecked_ref())
            .map_err(js_error)?;
        input.click();

        if rx.await.is_err() {
            return Ok(Vec::new());
        }
        drop(done);

        let Some(list) = input.files() else {
            return Ok(Vec::new());
        };
        let mut uploads = Vec::with_capacity(list.length() as usize);
        for index in 0..list.length() {
            if let Some(file) = list.get(index) {
                uploads.push(read_file(&file).await?);
            }
        }
        log::debug!("Picked {} file(s)", uploads.len());
        Ok(uploads)
    }
}

async fn read_file(file: &File) -> Result<FileUpload> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(js_error)?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(FileUpload::new(file.name(), file.type_(), bytes))
}

/// `accept` attribute value, e.g. `.xlsx,.csv`.
pub(crate) fn accept_attribute(extensions: &[String]) -> String {
    extensions
        .iter()
        .map(|e| format!(".{}", e.trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join(",")
}
