use serde::{Deserialize, Serialize};
use crate::message::Message;

/// A persisted analysis conversation as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    pub timestamp: String,
    #[serde(default)]
    pub file_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    /// Some backends inline messages; the client always fetches them separately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
}

impl Session {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            timestamp: crate::now_timestamp(),
            file_count: 0,
            is_favorite: Some(false),
            messages: None,
        }
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite.unwrap_or(false)
    }
}

/// Body of `POST /sessions` and `PUT /sessions/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTitle {
    pub title: String,
}

/// Default title for sessions created from the client.
pub fn new_analysis_title() -> String {
    format!(
        "New Analysis {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}
