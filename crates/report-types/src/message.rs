use std::fmt;
use serde::{Deserialize, Serialize};
use crate::file::FileAttachment;

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Network submission state of a message. `Sent` and `Error` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sending,
    #[default]
    Sent,
    Error,
}

/// A single turn in a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<FileAttachment>>,
    #[serde(default)]
    pub status: MessageStatus,
    #[serde(
        rename = "isStreaming",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_streaming: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_type: Option<AnalysisType>,
}

impl Message {
    /// Optimistic user message, recorded before the server has seen it.
    pub fn outgoing(
        id: impl Into<String>,
        content: impl Into<String>,
        attachments: Vec<FileAttachment>,
    ) -> Self {
        Self {
            id: id.into(),
            role: Role::User,
            content: content.into(),
            timestamp: crate::now_timestamp(),
            attachments: if attachments.is_empty() {
                None
            } else {
                Some(attachments)
            },
            status: MessageStatus::Sending,
            is_streaming: None,
            analysis_type: None,
        }
    }

    pub fn assistant(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: crate::now_timestamp(),
            attachments: None,
            status: MessageStatus::Sent,
            is_streaming: None,
            analysis_type: None,
        }
    }

    pub fn attachments(&self) -> &[FileAttachment] {
        self.attachments.as_deref().unwrap_or(&[])
    }

    /// True once the server has stored this message.
    pub fn is_confirmed(&self) -> bool {
        self.status == MessageStatus::Sent
    }
}

/// Tag telling the backend which canned analysis prompted a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnalysisType {
    #[default]
    Summarize,
    Trends,
    Kpis,
    Actions,
    Compare,
    Other(String),
}

impl AnalysisType {
    pub fn as_str(&self) -> &str {
        match self {
            AnalysisType::Summarize => "summarize",
            AnalysisType::Trends => "trends",
            AnalysisType::Kpis => "kpis",
            AnalysisType::Actions => "actions",
            AnalysisType::Compare => "compare",
            AnalysisType::Other(tag) => tag,
        }
    }

    /// Text placed in the composer when this analysis is picked.
    pub fn prompt(&self) -> &'static str {
        match self {
            AnalysisType::Summarize => {
                "Please provide a comprehensive summary of the uploaded reports."
            }
            AnalysisType::Trends => "Analyze and identify key trends in the data.",
            AnalysisType::Kpis => "Extract and highlight the key performance indicators.",
            AnalysisType::Actions => "Generate actionable recommendations based on the analysis.",
            AnalysisType::Compare => "Compare the uploaded reports and highlight differences.",
            AnalysisType::Other(_) => "Processing your request...",
        }
    }
}

impl From<String> for AnalysisType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "summarize" => AnalysisType::Summarize,
            "trends" => AnalysisType::Trends,
            "kpis" => AnalysisType::Kpis,
            "actions" => AnalysisType::Actions,
            "compare" => AnalysisType::Compare,
            _ => AnalysisType::Other(tag),
        }
    }
}

impl From<&str> for AnalysisType {
    fn from(tag: &str) -> Self {
        AnalysisType::from(tag.to_string())
    }
}

impl From<AnalysisType> for String {
    fn from(kind: AnalysisType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /messages/{session_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub content: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<FileAttachment>>,
    #[serde(default)]
    pub analysis_type: AnalysisType,
}

impl OutgoingMessage {
    pub fn new(
        content: impl Into<String>,
        attachments: Vec<FileAttachment>,
        analysis_type: Option<AnalysisType>,
    ) -> Self {
        Self {
            content: content.into(),
            role: Role::User,
            attachments: if attachments.is_empty() {
                None
            } else {
                Some(attachments)
            },
            analysis_type: analysis_type.unwrap_or_default(),
        }
    }
}
