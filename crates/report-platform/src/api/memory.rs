//! In-memory report backend.
//! Behaves like the REST backend but keeps everything in the page; nothing
//! survives a reload. Used for demos and tests.

use std::cell::RefCell;
use std::collections::HashMap;
use async_trait::async_trait;
use report_core::ports::ReportApiPort;
use report_types::{
    ChatError, Result,
    file::{FileAttachment, FileUpload, UploadStatus},
    message::{AnalysisType, Message, MessageStatus, OutgoingMessage, Role},
    session::Session,
};

pub struct MemoryReportApi {
    /// Insertion order is the listing order.
    sessions: RefCell<Vec<Session>>,
    messages: RefCell<HashMap<String, Vec<Message>>>,
    files: RefCell<HashMap<String, FileAttachment>>,
}

impl MemoryReportApi {
    pub fn new() -> Self {
        Self {
            sessions: RefCell::new(Vec::new()),
            messages: RefCell::new(HashMap::new()),
            files: RefCell::new(HashMap::new()),
        }
    }

    /// Backend pre-filled with three sample analyses.
    pub fn with_demo_data() -> Self {
        let api = Self::new();
        for (id, title, file_count, turns) in DEMO_SESSIONS {
            let mut session = Session::new(*id, *title);
            session.file_count = *file_count;
            let history = turns
                .iter()
                .enumerate()
                .map(|(n, (role, content))| {
                    let mut message = Message::assistant(format!("{}-m{}", id, n + 1), *content);
                    message.role = *role;
                    message
                })
                .collect();
            api.sessions.borrow_mut().push(session);
            api.messages.borrow_mut().insert(id.to_string(), history);
        }
        api
    }

    fn not_found(id: &str) -> ChatError {
        ChatError::server(404, format!("Session with ID {} not found", id))
    }

    fn with_session<T>(&self, id: &str, f: impl FnOnce(&mut Session) -> T) -> Result<T> {
        let mut sessions = self.sessions.borrow_mut();
        let session = sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(f(session))
    }
}

impl Default for MemoryReportApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ReportApiPort for MemoryReportApi {
    async fn list_sessions(&self) -> Result<Vec<Session>> {
        Ok(self.sessions.borrow().clone())
    }

    async fn get_session(&self, id: &str) -> Result<Session> {
        self.with_session(id, |s| s.clone())
    }

    async fn create_session(&self, title: &str) -> Result<Session> {
        let session = Session::new(uuid::Uuid::new_v4().to_string(), title);
        self.sessions.borrow_mut().push(session.clone());
        self.messages
            .borrow_mut()
            .insert(session.id.clone(), Vec::new());
        Ok(session)
    }

    async fn update_session(&self, id: &str, title: &str) -> Result<Session> {
        self.with_session(id, |s| {
            s.title = title.to_string();
            s.clone()
        })
    }

    async fn delete_session(&self, id: &str) -> Result<()> {
        let mut sessions = self.sessions.borrow_mut();
        let before = sessions.len();
        sessions.retain(|s| s.id != id);
        if sessions.len() == before {
            return Err(Self::not_found(id));
        }
        self.messages.borrow_mut().remove(id);
        Ok(())
    }

    async fn toggle_favorite(&self, id: &str) -> Result<Session> {
        self.with_session(id, |s| {
            s.is_favorite = Some(!s.is_favorite());
            s.clone()
        })
    }

    async fn list_messages(&self, session_id: &str) -> Result<Vec<Message>> {
        self.with_session(session_id, |_| ())?;
        Ok(self
            .messages
            .borrow()
            .get(session_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn send_message(&self, session_id: &str, message: OutgoingMessage) -> Result<Message> {
        let attached = message.attachments.as_ref().map_or(0, |a| a.len()) as u32;
        self.with_session(session_id, |s| s.file_count += attached)?;

        let stored = Message {
            id: uuid::Uuid::new_v4().to_string(),
            role: message.role,
            content: message.content,
            timestamp: report_types::now_timestamp(),
            attachments: message.attachments,
            status: MessageStatus::Sent,
            is_streaming: None,
            analysis_type: Some(message.analysis_type.clone()),
        };
        let mut reply = Message::assistant(
            uuid::Uuid::new_v4().to_string(),
            canned_reply(&message.analysis_type, attached),
        );
        reply.analysis_type = Some(message.analysis_type);

        let mut messages = self.messages.borrow_mut();
        let history = messages.entry(session_id.to_string()).or_default();
        history.push(stored.clone());
        history.push(reply);
        Ok(stored)
    }

    async fn upload_file(&self, file: FileUpload) -> Result<FileAttachment> {
        let mime_type = if file.mime_type.is_empty() {
            "application/octet-stream".to_string()
        } else {
            file.mime_type.clone()
        };
        let stored = FileAttachment {
            id: uuid::Uuid::new_v4().to_string(),
            name: file.name.clone(),
            size: file.size(),
            mime_type,
            upload_progress: 100,
            status: UploadStatus::Uploaded,
        };
        self.files
            .borrow_mut()
            .insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn delete_file(&self, id: &str) -> Result<()> {
        match self.files.borrow_mut().remove(id) {
            Some(_) => Ok(()),
            None => Err(ChatError::server(404, format!("File with ID {} not found", id))),
        }
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

pub(crate) fn canned_reply(kind: &AnalysisType, files: u32) -> String {
    let scope = match files {
        0 => "our conversation so far".to_string(),
        1 => "the attached file".to_string(),
        n => format!("the {} attached files", n),
    };
    let task = match kind {
        AnalysisType::Summarize => "a summary",
        AnalysisType::Trends => "the key trends",
        AnalysisType::Kpis => "the key performance indicators",
        AnalysisType::Actions => "recommended actions",
        AnalysisType::Compare => "a comparison",
        AnalysisType::Other(_) => "an answer",
    };
    format!("Demo mode: here is {} based on {}.", task, scope)
}

type DemoTurn = (Role, &'static str);

const DEMO_SESSIONS: &[(&str, &str, u32, &[DemoTurn])] = &[
    (
        "1",
        "Q3 Sales Analysis",
        3,
        &[
            (Role::Assistant, "I've analyzed your Q3 sales reports. Here are the key findings:"),
            (Role::User, "What are the main trends in revenue?"),
            (
                Role::Assistant,
                "Revenue increased by 23% compared to Q2, with strongest growth in the enterprise segment (+45%). Digital products showed exceptional performance.",
            ),
        ],
    ),
    (
        "2",
        "Marketing Report Review",
        2,
        &[
            (Role::Assistant, "Marketing report analysis complete. Campaign performance shows mixed results."),
            (Role::User, "Which campaigns performed best?"),
            (
                Role::Assistant,
                "Social media campaigns had 3x ROI, while email marketing achieved 45% open rates. Paid search needs optimization.",
            ),
        ],
    ),
    (
        "3",
        "Financial Dashboard",
        1,
        &[
            (Role::Assistant, "Financial dashboard loaded. All KPIs are within expected ranges."),
            (Role::User, "Show me the cash flow analysis"),
            (
                Role::Assistant,
                "Cash flow remains positive with $2.3M in operating activities. Working capital improved by 15%.",
            ),
        ],
    ),
];
