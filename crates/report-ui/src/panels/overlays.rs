//! Floating UI: delete confirmation, help drawer, toasts.

use egui::{self, Align2, RichText, Vec2};
use report_core::state::ChatState;
use report_types::action::QuickAction;
use crate::action::UiAction;
use crate::format::quick_action_label;
use crate::state::UiState;
use crate::theme::*;

/// Modal asking to confirm a pending delete.
pub fn delete_confirmation(ctx: &egui::Context, state: &ChatState) -> Option<UiAction> {
    let id = state.pending_delete.as_ref()?;
    let title = state
        .session(id)
        .map(|s| s.title.clone())
        .unwrap_or_else(|| "this session".to_string());

    let mut action = None;
    egui::Window::new("Delete session?")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(format!("\"{}\" and its messages will be removed.", title));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("Delete").color(ERROR)).clicked() {
                    action = Some(UiAction::ConfirmDelete);
                }
                if ui.button("Cancel").clicked() {
                    action = Some(UiAction::CancelDelete);
                }
            });
        });
    action
}

pub fn help_panel(ui: &mut egui::Ui) -> Option<UiAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.heading(RichText::new("Help").color(TEXT_PRIMARY));
        if ui.small_button("✕").clicked() {
            action = Some(UiAction::ToggleHelp);
        }
    });
    ui.separator();
    ui.label(RichText::new("Quick actions").color(ACCENT).strong());
    for quick in QuickAction::toolbar() {
        let hint = match &quick {
            QuickAction::Upload => "Show or hide the upload zone.",
            QuickAction::Analyze(kind) => kind.prompt(),
        };
        ui.label(
            RichText::new(format!("{}: {}", quick_action_label(&quick), hint))
                .color(TEXT_SECONDARY)
                .small(),
        );
    }
    action
}

/// Stack of toasts in the bottom-right corner.
pub fn toasts(ctx: &egui::Context, ui_state: &UiState) {
    if !ui_state.has_toasts() {
        return;
    }
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-12.0, -12.0))
        .interactable(false)
        .show(ctx, |ui| {
            for toast in &ui_state.toasts {
                egui::Frame::default()
                    .fill(BG_SECONDARY)
                    .stroke(egui::Stroke::new(1.0, notify_color(toast.level)))
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(PANEL_PADDING)
                    .show(ui, |ui| {
                        ui.label(RichText::new(&toast.text).color(TEXT_PRIMARY));
                    });
                ui.add_space(4.0);
            }
        });
}
