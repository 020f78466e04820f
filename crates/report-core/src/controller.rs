//! Runs view-model commands against the ports.
//!
//! Each command is spawned as its own local task. When it resolves, the
//! outcome is applied to the shared `ChatState` and any follow-up commands
//! are spawned in turn. The state is only borrowed between awaits, never
//! across one.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use futures::task::{LocalSpawn, LocalSpawnExt};
use futures::StreamExt;

use crate::command::{ApiEvent, Command, CreatePurpose, LoadOrigin};
use crate::ports::{FilePickerPort, ReplyWatchPort, ReportApiPort};
use crate::state::ChatState;

#[derive(Clone)]
pub struct ChatController {
    state: Rc<RefCell<ChatState>>,
    api: Rc<dyn ReportApiPort>,
    replies: Rc<dyn ReplyWatchPort>,
    spawner: Rc<dyn LocalSpawn>,
    picker: Option<Rc<dyn FilePickerPort>>,
}

impl ChatController {
    pub fn new(
        state: ChatState,
        api: Rc<dyn ReportApiPort>,
        replies: Rc<dyn ReplyWatchPort>,
        spawner: Rc<dyn LocalSpawn>,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            api,
            replies,
            spawner,
            picker: None,
        }
    }

    /// Enable click-to-browse uploads. Without a picker, `PickFiles` is ignored.
    pub fn with_file_picker(mut self, picker: Rc<dyn FilePickerPort>) -> Self {
        self.picker = Some(picker);
        self
    }

    /// Read-only view for rendering.
    pub fn state(&self) -> Ref<'_, ChatState> {
        self.state.borrow()
    }

    pub fn backend_name(&self) -> &str {
        self.api.backend_name()
    }

    /// Kick off the initial session list load.
    pub fn start(&self) {
        log::info!("Chat controller starting with {} backend", self.api.backend_name());
        self.update(ChatState::init);
    }

    /// Apply a user action and run whatever it asks for.
    pub fn update<F>(&self, action: F)
    where
        F: FnOnce(&mut ChatState) -> Vec<Command>,
    {
        let commands = action(&mut *self.state.borrow_mut());
        self.dispatch(commands);
    }

    /// Apply a user action that has no side effects.
    pub fn with_state<F>(&self, action: F)
    where
        F: FnOnce(&mut ChatState),
    {
        action(&mut *self.state.borrow_mut());
    }

    pub fn dispatch(&self, commands: Vec<Command>) {
        for command in commands {
            let this = self.clone();
            if let Err(e) = self.spawner.spawn_local(async move { this.run(command).await }) {
                log::error!("Failed to spawn command task: {}", e);
            }
        }
    }

    async fn run(self, command: Command) {
        if let Command::WatchReplies { session_id } = command {
            let mut snapshots = self.replies.watch(&session_id);
            while let Some(result) = snapshots.next().await {
                self.apply(ApiEvent::MessagesLoaded {
                    session_id: session_id.clone(),
                    origin: LoadOrigin::Reply,
                    result,
                });
            }
            return;
        }

        if let Command::PickFiles { accepted_extensions } = command {
            let Some(picker) = self.picker.clone() else {
                log::warn!("No file picker available; ignoring browse request");
                return;
            };
            let picked = picker.pick(&accepted_extensions).await;
            self.apply(ApiEvent::FilesPicked(picked));
            return;
        }

        if let Some(event) = execute(self.api.as_ref(), command).await {
            self.apply(event);
        }
    }

    fn apply(&self, event: ApiEvent) {
        let follow_up = self.state.borrow_mut().apply(event);
        self.dispatch(follow_up);
    }
}

/// Perform one request-style command and describe its outcome.
/// Returns `None` for commands that are not a single request.
pub async fn execute(api: &dyn ReportApiPort, command: Command) -> Option<ApiEvent> {
    log::debug!("Executing {:?} on {}", CommandName(&command), api.backend_name());
    let event = match command {
        Command::ListSessions => ApiEvent::SessionsLoaded(api.list_sessions().await),
        Command::CreateSession { title, purpose } => ApiEvent::SessionCreated {
            result: api.create_session(&title).await,
            purpose,
        },
        Command::LoadMessages { session_id } => ApiEvent::MessagesLoaded {
            result: api.list_messages(&session_id).await,
            session_id,
            origin: LoadOrigin::Select,
        },
        Command::SendMessage {
            session_id,
            local_id,
            message,
        } => {
            let attachment_ids = message
                .attachments
                .as_deref()
                .unwrap_or(&[])
                .iter()
                .map(|a| a.id.clone())
                .collect();
            ApiEvent::MessageSent {
                result: api.send_message(&session_id, message).await,
                session_id,
                local_id,
                attachment_ids,
            }
        }
        Command::RenameSession { id, title } => ApiEvent::SessionRenamed {
            result: api.update_session(&id, &title).await,
            id,
        },
        Command::ToggleFavorite { id } => ApiEvent::FavoriteToggled {
            result: api.toggle_favorite(&id).await,
            id,
        },
        Command::DeleteSession { id } => ApiEvent::SessionDeleted {
            result: api.delete_session(&id).await,
            id,
        },
        Command::UploadFile { temp_id, file } => {
            let name = file.name.clone();
            ApiEvent::FileUploaded {
                result: api.upload_file(file).await,
                temp_id,
                name,
            }
        }
        Command::WatchReplies { .. } | Command::PickFiles { .. } => return None,
    };
    Some(event)
}

/// Short label for logging; command payloads can hold file contents.
struct CommandName<'a>(&'a Command);

impl std::fmt::Debug for CommandName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.0 {
            Command::ListSessions => "ListSessions",
            Command::CreateSession { purpose: CreatePurpose::NewAnalysis, .. } => "CreateSession",
            Command::CreateSession { .. } => "CreateSession(first message)",
            Command::LoadMessages { .. } => "LoadMessages",
            Command::SendMessage { .. } => "SendMessage",
            Command::RenameSession { .. } => "RenameSession",
            Command::ToggleFavorite { .. } => "ToggleFavorite",
            Command::DeleteSession { .. } => "DeleteSession",
            Command::UploadFile { .. } => "UploadFile",
            Command::WatchReplies { .. } => "WatchReplies",
            Command::PickFiles { .. } => "PickFiles",
        };
        f.write_str(name)
    }
}
