//! The chat view-model.
//!
//! `ChatState` owns every piece of client-side state. User actions are
//! transitions that mutate the state synchronously (optimistic updates) and
//! return the [`Command`]s the controller must run. Each finished command
//! comes back through [`ChatState::apply`], which reconciles the result by
//! entity id and may return follow-up commands.
//!
//! No transition touches the network or awaits anything, so the whole
//! view-model can be driven from tests without a runtime.

use std::collections::HashMap;

use log::{debug, error, info, warn};
use report_types::{
    ChatError,
    action::QuickAction,
    config::ClientConfig,
    event::Notification,
    file::{is_accepted_upload, FileAttachment, FileUpload, UploadStatus},
    message::{AnalysisType, Message, MessageStatus, OutgoingMessage},
    session::{new_analysis_title, Session},
};

use crate::command::{ApiEvent, Command, CreatePurpose, Draft, LoadOrigin};
use crate::event_bus::EventBus;
use crate::reconcile::{find_mut, merge_messages, patch_message, replace_by_id, replace_keyed};

/// Inline rename in progress in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEdit {
    pub id: String,
    pub title: String,
}

pub struct ChatState {
    /// Sidebar list, most recently created first.
    pub sessions: Vec<Session>,
    /// `None` until a real session exists (the draft session).
    pub current_session_id: Option<String>,
    /// Messages of the current session.
    pub messages: Vec<Message>,
    /// Uploads staged for the next message.
    pub pending_files: Vec<FileAttachment>,
    pub input_text: String,
    pub sidebar_collapsed: bool,
    pub upload_zone_visible: bool,
    pub welcome_visible: bool,
    pub help_visible: bool,
    pub is_loading: bool,
    pub editing: Option<SessionEdit>,
    pub selected_model: String,
    /// Tag for the next message, set by quick actions.
    pub pending_analysis: Option<AnalysisType>,
    /// Session awaiting delete confirmation.
    pub pending_delete: Option<String>,
    /// True while the first message waits for its session to be created.
    awaiting_session: bool,
    /// Session whose select-load drives `is_loading`.
    loading_session: Option<String>,
    /// Server message id -> local id of the optimistic copy.
    aliases: HashMap<String, String>,
    accepted_extensions: Vec<String>,
    notifications: EventBus,
}

impl ChatState {
    pub fn new(config: &ClientConfig, notifications: EventBus) -> Self {
        Self {
            sessions: Vec::new(),
            current_session_id: None,
            messages: Vec::new(),
            pending_files: Vec::new(),
            input_text: String::new(),
            sidebar_collapsed: false,
            upload_zone_visible: true,
            welcome_visible: true,
            help_visible: false,
            is_loading: false,
            editing: None,
            selected_model: config.default_model(),
            pending_analysis: None,
            pending_delete: None,
            awaiting_session: false,
            loading_session: None,
            aliases: HashMap::new(),
            accepted_extensions: config.accepted_extensions.clone(),
            notifications,
        }
    }

    // ─── Queries ─────────────────────────────────────────────

    pub fn notifications(&self) -> &EventBus {
        &self.notifications
    }

    pub fn is_draft(&self) -> bool {
        self.current_session_id.is_none()
    }

    pub fn is_current(&self, session_id: &str) -> bool {
        self.current_session_id.as_deref() == Some(session_id)
    }

    pub fn current_session(&self) -> Option<&Session> {
        let id = self.current_session_id.as_deref()?;
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Whether `send` would do anything.
    pub fn can_send(&self) -> bool {
        !self.awaiting_session
            && (!self.input_text.trim().is_empty() || !self.pending_files.is_empty())
    }

    /// Extensions `select_files` lets through, without dots.
    pub fn accepted_extensions(&self) -> &[String] {
        &self.accepted_extensions
    }

    pub fn uploads_in_flight(&self) -> usize {
        self.pending_files
            .iter()
            .filter(|f| f.status == UploadStatus::Uploading)
            .count()
    }

    // ─── Session transitions ─────────────────────────────────

    /// Initial load of the sidebar.
    pub fn init(&mut self) -> Vec<Command> {
        self.is_loading = true;
        vec![Command::ListSessions]
    }

    pub fn select_session(&mut self, id: &str) -> Vec<Command> {
        self.current_session_id = Some(id.to_string());
        self.loading_session = Some(id.to_string());
        self.is_loading = true;
        vec![Command::LoadMessages {
            session_id: id.to_string(),
        }]
    }

    pub fn new_session(&mut self) -> Vec<Command> {
        vec![Command::CreateSession {
            title: new_analysis_title(),
            purpose: CreatePurpose::NewAnalysis,
        }]
    }

    /// Forwarded to the server as-is, blank titles included.
    pub fn rename(&mut self, id: &str, title: &str) -> Vec<Command> {
        vec![Command::RenameSession {
            id: id.to_string(),
            title: title.to_string(),
        }]
    }

    pub fn start_editing(&mut self, id: &str) {
        let title = self.session(id).map(|s| s.title.clone()).unwrap_or_default();
        self.editing = Some(SessionEdit {
            id: id.to_string(),
            title,
        });
    }

    pub fn set_editing_title(&mut self, title: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.title = title.into();
        }
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    /// Submit the inline rename. Editing state stays until the server accepts.
    pub fn commit_editing(&mut self) -> Vec<Command> {
        match self.editing.clone() {
            Some(edit) => self.rename(&edit.id, &edit.title),
            None => Vec::new(),
        }
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Vec<Command> {
        vec![Command::ToggleFavorite { id: id.to_string() }]
    }

    /// First step of deleting: ask the user to confirm.
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Vec<Command> {
        match self.pending_delete.take() {
            Some(id) => vec![Command::DeleteSession { id }],
            None => Vec::new(),
        }
    }

    // ─── Composer transitions ────────────────────────────────

    pub fn send(&mut self) -> Vec<Command> {
        if !self.can_send() {
            return Vec::new();
        }

        let draft = Draft {
            content: self.input_text.clone(),
            attachments: self.pending_files.clone(),
            analysis_type: self.pending_analysis.take(),
        };

        match self.current_session_id.clone() {
            Some(session_id) => self.record_outgoing(session_id, draft),
            None => {
                self.awaiting_session = true;
                vec![Command::CreateSession {
                    title: new_analysis_title(),
                    purpose: CreatePurpose::FirstMessage(draft),
                }]
            }
        }
    }

    /// Optimistically append the user's message and ask for it to be sent.
    fn record_outgoing(&mut self, session_id: String, draft: Draft) -> Vec<Command> {
        let local_id = report_types::local_id();
        self.messages.push(Message::outgoing(
            local_id.clone(),
            draft.content.clone(),
            draft.attachments.clone(),
        ));
        self.input_text.clear();
        self.welcome_visible = false;
        if !draft.attachments.is_empty() {
            self.upload_zone_visible = false;
        }

        vec![outgoing_command(session_id, local_id, draft)]
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn trigger_action(&mut self, action: QuickAction) {
        match action {
            QuickAction::Upload => {
                self.upload_zone_visible = !self.upload_zone_visible;
            }
            QuickAction::Analyze(kind) => {
                self.input_text = kind.prompt().to_string();
                self.pending_analysis = Some(kind);
            }
        }
    }

    /// Stage picked files. Each accepted file shows up immediately as uploading.
    pub fn select_files(&mut self, files: Vec<FileUpload>) -> Vec<Command> {
        let mut commands = Vec::new();
        for file in files {
            if !is_accepted_upload(&file.name, &self.accepted_extensions) {
                warn!("Rejected upload with unsupported type: {}", file.name);
                self.notify(Notification::warning(format!(
                    "{} is not a supported file type",
                    file.name
                )));
                continue;
            }
            let temp_id = report_types::local_id();
            self.pending_files.push(FileAttachment::pending(temp_id.clone(), &file));
            commands.push(Command::UploadFile { temp_id, file });
        }
        commands
    }

    /// Ask for the file chooser. Chosen files go through `select_files`.
    pub fn browse_files(&mut self) -> Vec<Command> {
        vec![Command::PickFiles {
            accepted_extensions: self.accepted_extensions.clone(),
        }]
    }

    /// Client-side only; server-held files are untouched.
    pub fn remove_pending_file(&mut self, id: &str) {
        self.pending_files.retain(|f| f.id != id);
    }

    // ─── Plain UI toggles ────────────────────────────────────

    pub fn set_selected_model(&mut self, model: impl Into<String>) {
        self.selected_model = model.into();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn dismiss_welcome(&mut self) {
        self.welcome_visible = false;
    }

    pub fn back_to_dashboard(&mut self) {
        self.notify(Notification::info("Navigating to dashboard..."));
    }

    // ─── Command results ─────────────────────────────────────

    pub fn apply(&mut self, event: ApiEvent) -> Vec<Command> {
        match event {
            ApiEvent::SessionsLoaded(result) => {
                self.on_sessions_loaded(result);
                Vec::new()
            }
            ApiEvent::SessionCreated { purpose, result } => self.on_session_created(purpose, result),
            ApiEvent::MessagesLoaded {
                session_id,
                origin,
                result,
            } => {
                self.on_messages_loaded(&session_id, origin, result);
                Vec::new()
            }
            ApiEvent::MessageSent {
                session_id,
                local_id,
                attachment_ids,
                result,
            } => self.on_message_sent(session_id, &local_id, &attachment_ids, result),
            ApiEvent::SessionRenamed { id, result } => {
                self.on_session_renamed(&id, result);
                Vec::new()
            }
            ApiEvent::FavoriteToggled { id, result } => {
                self.on_favorite_toggled(&id, result);
                Vec::new()
            }
            ApiEvent::SessionDeleted { id, result } => {
                self.on_session_deleted(&id, result);
                Vec::new()
            }
            ApiEvent::FileUploaded {
                temp_id,
                name,
                result,
            } => {
                self.on_file_uploaded(&temp_id, &name, result);
                Vec::new()
            }
            ApiEvent::FilesPicked(Ok(files)) => self.select_files(files),
            ApiEvent::FilesPicked(Err(e)) => {
                error!("Error reading chosen files: {}", e);
                self.notify(Notification::error("Failed to read the selected files"));
                Vec::new()
            }
        }
    }

    fn on_sessions_loaded(&mut self, result: Result<Vec<Session>, ChatError>) {
        self.is_loading = false;
        match result {
            Ok(sessions) => {
                info!("Loaded {} sessions", sessions.len());
                self.sessions = sessions;
            }
            Err(e) => {
                error!("Error fetching sessions: {}", e);
                self.notify(Notification::error("Failed to load sessions"));
            }
        }
    }

    fn on_session_created(
        &mut self,
        purpose: CreatePurpose,
        result: Result<Session, ChatError>,
    ) -> Vec<Command> {
        match (purpose, result) {
            (CreatePurpose::NewAnalysis, Ok(session)) => {
                info!("Created session {}", session.id);
                let id = session.id.clone();
                self.sessions.insert(0, session);
                self.messages.clear();
                self.pending_files.clear();
                self.input_text.clear();
                self.upload_zone_visible = true;
                self.welcome_visible = true;
                self.switch_away(Some(id));
                self.notify(Notification::success("New analysis session created"));
                Vec::new()
            }
            (CreatePurpose::NewAnalysis, Err(e)) => {
                error!("Error creating new session: {}", e);
                self.notify(Notification::error("Failed to create new session"));
                Vec::new()
            }
            (CreatePurpose::FirstMessage(draft), Ok(session)) => {
                info!("Created session {} for first message", session.id);
                self.awaiting_session = false;
                let id = session.id.clone();
                self.sessions.insert(0, session);
                if !self.is_draft() {
                    // The user opened another session meanwhile; deliver the
                    // message without showing it there.
                    debug!("Sending first message of {} in the background", id);
                    if self.input_text == draft.content {
                        self.input_text.clear();
                    }
                    return vec![outgoing_command(id, report_types::local_id(), draft)];
                }
                // A freshly created session has no history yet.
                self.messages.clear();
                self.switch_away(Some(id.clone()));
                self.record_outgoing(id, draft)
            }
            (CreatePurpose::FirstMessage(draft), Err(e)) => {
                error!("Error creating session: {}", e);
                self.awaiting_session = false;
                if self.pending_analysis.is_none() {
                    self.pending_analysis = draft.analysis_type;
                }
                self.notify(Notification::error("Failed to create session"));
                Vec::new()
            }
        }
    }

    fn on_messages_loaded(
        &mut self,
        session_id: &str,
        origin: LoadOrigin,
        result: Result<Vec<Message>, ChatError>,
    ) {
        if origin == LoadOrigin::Select && self.loading_session.as_deref() == Some(session_id) {
            self.loading_session = None;
            self.is_loading = false;
        }
        if !self.is_current(session_id) {
            debug!("Discarding {:?} messages for stale session {}", origin, session_id);
            return;
        }

        match origin {
            LoadOrigin::Select => match result {
                Ok(messages) => {
                    self.welcome_visible = messages.is_empty();
                    self.messages = messages;
                    self.upload_zone_visible = false;
                    let title = self
                        .session(session_id)
                        .map(|s| s.title.clone())
                        .unwrap_or_default();
                    if !title.is_empty() {
                        self.notify(Notification::info(format!("Loaded session: {}", title)));
                    }
                }
                Err(e) => {
                    error!("Error loading session {}: {}", session_id, e);
                    self.notify(Notification::error("Failed to load session"));
                }
            }
            LoadOrigin::Reply => match result {
                Ok(snapshot) => {
                    self.messages = merge_messages(&self.messages, snapshot, &self.aliases);
                    if !self.messages.is_empty() {
                        self.welcome_visible = false;
                    }
                }
                // The reply may simply not be ready yet.
                Err(e) => warn!("Reply check for session {} failed: {}", session_id, e),
            },
        }
    }

    fn on_message_sent(
        &mut self,
        session_id: String,
        local_id: &str,
        attachment_ids: &[String],
        result: Result<Message, ChatError>,
    ) -> Vec<Command> {
        match result {
            Ok(stored) => {
                self.pending_files.retain(|f| !attachment_ids.contains(&f.id));

                if !self.is_current(&session_id) {
                    debug!("Message {} confirmed for stale session {}", local_id, session_id);
                    return Vec::new();
                }
                let Some(local) = find_mut(&mut self.messages, local_id) else {
                    return Vec::new();
                };
                self.aliases.insert(stored.id.clone(), local_id.to_string());
                patch_message(local, stored);
                vec![Command::WatchReplies { session_id }]
            }
            Err(e) => {
                error!("Error sending message: {}", e);
                self.notify(Notification::error("Failed to send message"));
                if let Some(local) = find_mut(&mut self.messages, local_id) {
                    local.status = MessageStatus::Error;
                }
                Vec::new()
            }
        }
    }

    fn on_session_renamed(&mut self, id: &str, result: Result<Session, ChatError>) {
        match result {
            Ok(session) => {
                replace_by_id(&mut self.sessions, session);
                if self.editing.as_ref().is_some_and(|e| e.id == id) {
                    self.editing = None;
                }
                self.notify(Notification::success("Session renamed"));
            }
            Err(e) => {
                error!("Error renaming session {}: {}", id, e);
                self.notify(Notification::error("Failed to rename session"));
            }
        }
    }

    fn on_favorite_toggled(&mut self, id: &str, result: Result<Session, ChatError>) {
        match result {
            Ok(session) => {
                let text = if session.is_favorite() {
                    "Added to favorites"
                } else {
                    "Removed from favorites"
                };
                replace_by_id(&mut self.sessions, session);
                self.notify(Notification::success(text));
            }
            Err(e) => {
                error!("Error toggling favorite for {}: {}", id, e);
                self.notify(Notification::error("Failed to update favorite status"));
            }
        }
    }

    fn on_session_deleted(&mut self, id: &str, result: Result<(), ChatError>) {
        match result {
            Ok(()) => {
                info!("Deleted session {}", id);
                self.sessions.retain(|s| s.id != id);
                if self.editing.as_ref().is_some_and(|e| e.id == id) {
                    self.editing = None;
                }
                self.notify(Notification::success("Session deleted"));

                if self.is_current(id) {
                    self.switch_away(None);
                    self.messages.clear();
                    self.welcome_visible = true;
                }
            }
            Err(e) => {
                error!("Error deleting session {}: {}", id, e);
                self.notify(Notification::error("Failed to delete session"));
            }
        }
    }

    fn on_file_uploaded(
        &mut self,
        temp_id: &str,
        name: &str,
        result: Result<FileAttachment, ChatError>,
    ) {
        match result {
            Ok(stored) => {
                let confirmed = FileAttachment {
                    upload_progress: 100,
                    status: UploadStatus::Uploaded,
                    ..stored
                };
                if replace_keyed(&mut self.pending_files, temp_id, confirmed) {
                    self.notify(Notification::success(format!("{} uploaded successfully", name)));
                } else {
                    debug!("Upload {} finished after removal", temp_id);
                }
            }
            Err(e) => {
                error!("Error uploading {}: {}", name, e);
                if let Some(file) = find_mut(&mut self.pending_files, temp_id) {
                    file.status = UploadStatus::Error;
                }
                self.notify(Notification::error(format!("Failed to upload {}", name)));
            }
        }
    }

    /// Make `id` current without loading it. A select-load still in flight
    /// no longer belongs to what is on screen.
    fn switch_away(&mut self, id: Option<String>) {
        if self.loading_session.take().is_some() {
            self.is_loading = false;
        }
        self.current_session_id = id;
    }

    fn notify(&self, notification: Notification) {
        self.notifications.emit(notification);
    }
}

fn outgoing_command(session_id: String, local_id: String, draft: Draft) -> Command {
    Command::SendMessage {
        session_id,
        local_id,
        message: OutgoingMessage::new(draft.content, draft.attachments, draft.analysis_type),
    }
}
