//! User intents produced by the panels.

use report_core::command::Command;
use report_core::state::ChatState;
use report_types::action::QuickAction;
use report_types::file::FileUpload;

/// Something the user did this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // Sidebar
    SelectSession(String),
    NewSession,
    ToggleFavorite(String),
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
    StartEditing(String),
    EditTitle(String),
    CommitEditing,
    CancelEditing,
    ToggleSidebar,
    BackToDashboard,

    // Composer
    SetInput(String),
    Send,
    Quick(QuickAction),
    AddFiles(Vec<FileUpload>),
    BrowseFiles,
    RemoveFile(String),

    // Header / chat area
    SelectModel(String),
    ToggleHelp,
    DismissWelcome,
}

impl UiAction {
    /// Run the matching view-model transition.
    pub fn apply(self, state: &mut ChatState) -> Vec<Command> {
        match self {
            UiAction::SelectSession(id) => return state.select_session(&id),
            UiAction::NewSession => return state.new_session(),
            UiAction::ToggleFavorite(id) => return state.toggle_favorite(&id),
            UiAction::RequestDelete(id) => state.request_delete(&id),
            UiAction::ConfirmDelete => return state.confirm_delete(),
            UiAction::CancelDelete => state.cancel_delete(),
            UiAction::StartEditing(id) => state.start_editing(&id),
            UiAction::EditTitle(title) => state.set_editing_title(title),
            UiAction::CommitEditing => return state.commit_editing(),
            UiAction::CancelEditing => state.cancel_editing(),
            UiAction::ToggleSidebar => state.toggle_sidebar(),
            UiAction::BackToDashboard => state.back_to_dashboard(),
            UiAction::SetInput(text) => state.set_input(text),
            UiAction::Send => return state.send(),
            UiAction::Quick(action) => state.trigger_action(action),
            UiAction::AddFiles(files) => return state.select_files(files),
            UiAction::BrowseFiles => return state.browse_files(),
            UiAction::RemoveFile(id) => state.remove_pending_file(&id),
            UiAction::SelectModel(model) => state.set_selected_model(model),
            UiAction::ToggleHelp => state.toggle_help(),
            UiAction::DismissWelcome => state.dismiss_welcome(),
        }
        Vec::new()
    }
}

/// Convert files dropped onto the window into uploads.
/// Entries without in-memory bytes (native path drops) are skipped.
pub fn dropped_uploads(dropped: &[egui::DroppedFile]) -> Vec<FileUpload> {
    dropped
        .iter()
        .filter_map(|file| {
            let Some(bytes) = file.bytes.as_ref() else {
                log::debug!("Skipping dropped file without contents: {:?}", file.path);
                return None;
            };
            let name = if file.name.is_empty() {
                file.path
                    .as_ref()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())?
            } else {
                file.name.clone()
            };
            Some(FileUpload::new(name, file.mime.clone(), bytes.to_vec()))
        })
        .collect()
}
