//! REST adapter for the report backend.
//!
//! Uses browser `fetch()` via gloo-net. JSON in and out, except the file
//! upload which is sent as multipart form data built from a `Blob`.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use js_sys::{Array, Uint8Array};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use report_core::ports::ReportApiPort;
use report_types::{
    ChatError, Result,
    config::ClientConfig,
    file::{FileAttachment, FileUpload},
    message::{Message, OutgoingMessage},
    session::{Session, SessionTitle},
};

pub struct HttpReportApi {
    config: ClientConfig,
}

impl HttpReportApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Send a request without a body and decode the JSON answer.
    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = send(builder.build().map_err(network)?).await?;
        decode(response).await
    }

    /// Send a JSON body and decode the JSON answer.
    async fn fetch_with<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T> {
        let request = builder
            .json(body)
            .map_err(|e| ChatError::Serialization(e.to_string()))?;
        decode(send(request).await?).await
    }

    /// Send a request whose success response carries no body (204).
    async fn fetch_empty(&self, builder: RequestBuilder) -> Result<()> {
        send(builder.build().map_err(network)?).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl ReportApiPort for HttpReportApi {
    async fn list_sessions(&self) -> Result<Vec<Session>> {
        self.fetch(Request::get(&self.url("/sessions"))).await
    }

    async fn get_session(&self, id: &str) -> Result<Session> {
        self.fetch(Request::get(&self.url(&format!("/sessions/{}", id))))
            .await
    }

    async fn create_session(&self, title: &str) -> Result<Session> {
        let body = SessionTitle {
            title: title.to_string(),
        };
        self.fetch_with(Request::post(&self.url("/sessions")), &body)
            .await
    }

    async fn update_session(&self, id: &str, title: &str) -> Result<Session> {
        let body = SessionTitle {
            title: title.to_string(),
        };
        self.fetch_with(Request::put(&self.url(&format!("/sessions/{}", id))), &body)
            .await
    }

    async fn delete_session(&self, id: &str) -> Result<()> {
        self.fetch_empty(Request::delete(&self.url(&format!("/sessions/{}", id))))
            .await
    }

    async fn toggle_favorite(&self, id: &str) -> Result<Session> {
        self.fetch(Request::put(&self.url(&format!("/sessions/{}/favorite", id))))
            .await
    }

    async fn list_messages(&self, session_id: &str) -> Result<Vec<Message>> {
        self.fetch(Request::get(&self.url(&format!("/messages/{}", session_id))))
            .await
    }

    async fn send_message(&self, session_id: &str, message: OutgoingMessage) -> Result<Message> {
        self.fetch_with(
            Request::post(&self.url(&format!("/messages/{}", session_id))),
            &message,
        )
        .await
    }

    async fn upload_file(&self, file: FileUpload) -> Result<FileAttachment> {
        let form = multipart_form(&file)?;
        // No Content-Type header: the browser adds the multipart boundary.
        let request = Request::post(&self.url("/files/upload"))
            .body(form)
            .map_err(network)?;
        decode(send(request).await?).await
    }

    async fn delete_file(&self, id: &str) -> Result<()> {
        self.fetch_empty(Request::delete(&self.url(&format!("/files/{}", id))))
            .await
    }

    fn backend_name(&self) -> &str {
        "http"
    }
}

// ─── Request helpers ─────────────────────────────────────────

async fn send(request: Request) -> Result<Response> {
    log::debug!("{:?} {}", request.method(), request.url());
    let response = request.send().await.map_err(network)?;

    if !response.ok() {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| response.status_text());
        return Err(ChatError::server(status, error_detail(&text)));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| ChatError::Serialization(e.to_string()))
}

fn network(e: gloo_net::Error) -> ChatError {
    ChatError::Network(e.to_string())
}

pub(crate) fn js_error(value: JsValue) -> ChatError {
    ChatError::JsInterop(format!("{:?}", value))
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Pull a readable message out of an error body. The backend reports errors
/// as `{"detail": ...}`; anything else is returned as-is.
pub(crate) fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(text),
        }) => text,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) => body.to_string(),
    }
}

fn multipart_form(file: &FileUpload) -> Result<FormData> {
    let bytes = Uint8Array::from(file.data.as_slice());
    let parts = Array::of1(&bytes);

    let options = BlobPropertyBag::new();
    options.set_type(&file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", &blob, &file.name)
        .map_err(js_error)?;
    Ok(form)
}
