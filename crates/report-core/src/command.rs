//! Side effects requested by view-model transitions, and the events their
//! completion feeds back into the view-model.

use report_types::{
    Result,
    file::{FileAttachment, FileUpload},
    message::{AnalysisType, Message, OutgoingMessage},
    session::Session,
};

/// Work for the controller to perform against the ports.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ListSessions,
    CreateSession { title: String, purpose: CreatePurpose },
    LoadMessages { session_id: String },
    SendMessage {
        session_id: String,
        local_id: String,
        message: OutgoingMessage,
    },
    RenameSession { id: String, title: String },
    ToggleFavorite { id: String },
    DeleteSession { id: String },
    UploadFile { temp_id: String, file: FileUpload },
    /// Open the file chooser; the chosen files are staged like dropped ones.
    PickFiles { accepted_extensions: Vec<String> },
    /// Follow the session's message list until the assistant reply shows up.
    WatchReplies { session_id: String },
}

/// Why a session is being created. Carries whatever the continuation needs.
#[derive(Debug, Clone, PartialEq)]
pub enum CreatePurpose {
    /// "New analysis" button.
    NewAnalysis,
    /// First message typed while no session existed yet.
    FirstMessage(Draft),
}

/// Composer contents captured at the moment the user pressed send.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub content: String,
    pub attachments: Vec<FileAttachment>,
    pub analysis_type: Option<AnalysisType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// The user switched to the session.
    Select,
    /// A reply-watch snapshot after sending.
    Reply,
}

/// Outcome of a command, applied back onto the view-model.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    SessionsLoaded(Result<Vec<Session>>),
    SessionCreated {
        purpose: CreatePurpose,
        result: Result<Session>,
    },
    MessagesLoaded {
        session_id: String,
        origin: LoadOrigin,
        result: Result<Vec<Message>>,
    },
    MessageSent {
        session_id: String,
        local_id: String,
        attachment_ids: Vec<String>,
        result: Result<Message>,
    },
    SessionRenamed {
        id: String,
        result: Result<Session>,
    },
    FavoriteToggled {
        id: String,
        result: Result<Session>,
    },
    SessionDeleted {
        id: String,
        result: Result<()>,
    },
    FileUploaded {
        temp_id: String,
        name: String,
        result: Result<FileAttachment>,
    },
    FilesPicked(Result<Vec<FileUpload>>),
}
