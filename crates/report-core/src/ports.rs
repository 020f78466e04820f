//! Port traits — the boundary between the view-model and the browser.
//!
//! These traits are defined here in `report-core` (pure Rust).
//! Implementations live in `report-platform` (browser adapters).

use std::pin::Pin;
use async_trait::async_trait;
use futures::Stream;
use report_types::{
    Result,
    file::{FileAttachment, FileUpload},
    message::{Message, OutgoingMessage},
    session::Session,
};

// ─── Backend API Port ────────────────────────────────────────

/// The sessions/messages/files REST backend.
///
/// Every call is a single request/response round trip: no retry,
/// no timeout override, no idempotency key.
#[async_trait(?Send)]
pub trait ReportApiPort {
    /// `GET /sessions`
    async fn list_sessions(&self) -> Result<Vec<Session>>;

    /// `GET /sessions/{id}`
    async fn get_session(&self, id: &str) -> Result<Session>;

    /// `POST /sessions`
    async fn create_session(&self, title: &str) -> Result<Session>;

    /// `PUT /sessions/{id}`
    async fn update_session(&self, id: &str, title: &str) -> Result<Session>;

    /// `DELETE /sessions/{id}`
    async fn delete_session(&self, id: &str) -> Result<()>;

    /// `PUT /sessions/{id}/favorite` — the server decides the new flag.
    async fn toggle_favorite(&self, id: &str) -> Result<Session>;

    /// `GET /messages/{session_id}`
    async fn list_messages(&self, session_id: &str) -> Result<Vec<Message>>;

    /// `POST /messages/{session_id}`. Returns the stored user message only;
    /// the assistant reply is produced out-of-band.
    async fn send_message(&self, session_id: &str, message: OutgoingMessage) -> Result<Message>;

    /// `POST /files/upload` as multipart field `file`.
    async fn upload_file(&self, file: FileUpload) -> Result<FileAttachment>;

    /// `DELETE /files/{id}`
    async fn delete_file(&self, id: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Timer Port ──────────────────────────────────────────────

#[async_trait(?Send)]
pub trait TimerPort {
    async fn sleep(&self, ms: u64);
}

// ─── File Picker Port ────────────────────────────────────────

/// Native file chooser. Resolves with the chosen files read into memory;
/// a dismissed dialog yields an empty list.
#[async_trait(?Send)]
pub trait FilePickerPort {
    async fn pick(&self, accepted_extensions: &[String]) -> Result<Vec<FileUpload>>;
}

// ─── Reply Watch Port ────────────────────────────────────────

/// Source of message-list snapshots after a message was sent, used to pick
/// up the assistant reply the backend produces asynchronously.
///
/// A push-capable backend yields one snapshot per change. The polling
/// implementation in `replies` is the fallback for backends without one.
pub trait ReplyWatchPort {
    fn watch(&self, session_id: &str) -> Pin<Box<dyn Stream<Item = Result<Vec<Message>>>>>;
}
