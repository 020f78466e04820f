//! Composer — quick actions, upload zone, staged files, input and send.

use egui::{self, Key, KeyboardShortcut, Modifiers, RichText, Vec2};
use report_core::state::ChatState;
use report_types::action::QuickAction;
use report_types::file::UploadStatus;
use crate::action::UiAction;
use crate::format::{file_label, quick_action_label};
use crate::theme::*;

pub fn composer_panel(ui: &mut egui::Ui, state: &ChatState) -> Vec<UiAction> {
    let mut actions = Vec::new();

    ui.horizontal_wrapped(|ui| {
        for action in QuickAction::toolbar() {
            let selected = match &action {
                QuickAction::Upload => state.upload_zone_visible,
                QuickAction::Analyze(kind) => state.pending_analysis.as_ref() == Some(kind),
            };
            if ui.selectable_label(selected, quick_action_label(&action)).clicked() {
                actions.push(UiAction::Quick(action));
            }
        }
    });

    if state.upload_zone_visible {
        upload_zone(ui, state, &mut actions);
    }

    if !state.pending_files.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for file in &state.pending_files {
                egui::Frame::default()
                    .fill(BG_SURFACE)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(4.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(file_label(file))
                                    .color(TEXT_PRIMARY)
                                    .small(),
                            );
                            match file.status {
                                UploadStatus::Uploading => {
                                    ui.add(
                                        egui::ProgressBar::new(file.upload_progress as f32 / 100.0)
                                            .desired_width(40.0),
                                    );
                                }
                                UploadStatus::Error => {
                                    ui.label(RichText::new("!").color(ERROR).strong());
                                }
                                UploadStatus::Uploaded => {}
                            }
                            if ui.small_button("✕").clicked() {
                                actions.push(UiAction::RemoveFile(file.id.clone()));
                            }
                        });
                    });
            }
        });
    }

    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let mut text = state.input_text.clone();
        let input = egui::TextEdit::multiline(&mut text)
            .hint_text("Ask about your reports… (Shift+Enter for a new line)")
            .desired_rows(2)
            .desired_width(ui.available_width() - 70.0)
            .return_key(KeyboardShortcut::new(Modifiers::SHIFT, Key::Enter));
        let response = ui.add(input);
        if response.changed() {
            actions.push(UiAction::SetInput(text));
        }

        let enter = response.has_focus()
            && ui.input(|i| i.key_pressed(Key::Enter) && !i.modifiers.shift);

        let send_enabled = state.can_send();
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        if (enter && send_enabled) || send_btn.clicked() {
            actions.push(UiAction::Send);
        }
    });

    actions
}

fn upload_zone(ui: &mut egui::Ui, state: &ChatState, actions: &mut Vec<UiAction>) {
    let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    egui::Frame::default()
        .fill(if hovering { BG_SURFACE } else { BG_SECONDARY })
        .stroke(egui::Stroke::new(1.0, if hovering { ACCENT } else { BG_SURFACE }))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Drop report files here").color(TEXT_PRIMARY));
                if ui.button("Browse files…").clicked() {
                    actions.push(UiAction::BrowseFiles);
                }
                ui.label(
                    RichText::new(format!(
                        "Supported: {}",
                        accepted_label(state.accepted_extensions())
                    ))
                        .color(TEXT_SECONDARY)
                        .small(),
                );
                let in_flight = state.uploads_in_flight();
                if in_flight > 0 {
                    ui.label(
                        RichText::new(format!("Uploading {} file(s)…", in_flight))
                            .color(WARNING)
                            .small(),
                    );
                }
            });
        });
}

pub(crate) fn accepted_label(extensions: &[String]) -> String {
    extensions
        .iter()
        .map(|e| format!(".{}", e.trim_start_matches('.')))
        .collect::<Vec<_>>()
        .join(", ")
}
