//! Session sidebar — list, favorites, inline rename, delete request.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use report_core::state::ChatState;
use report_types::session::Session;
use crate::action::UiAction;
use crate::format::{file_count_label, session_date};
use crate::theme::*;

pub fn sidebar_panel(ui: &mut egui::Ui, state: &ChatState) -> Vec<UiAction> {
    let mut actions = Vec::new();

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            if ui
                .button(RichText::new("← Dashboard").color(TEXT_SECONDARY).small())
                .clicked()
            {
                actions.push(UiAction::BackToDashboard);
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.small_button("«").on_hover_text("Collapse").clicked() {
                    actions.push(UiAction::ToggleSidebar);
                }
            });
        });

        ui.add_space(4.0);
        let new_btn = egui::Button::new(RichText::new("+ New analysis").color(TEXT_PRIMARY))
            .fill(ACCENT)
            .corner_radius(PANEL_ROUNDING)
            .min_size(Vec2::new(ui.available_width(), 28.0));
        if ui.add(new_btn).clicked() {
            actions.push(UiAction::NewSession);
        }

        ui.add_space(8.0);
        ui.label(RichText::new("Recent analyses").color(TEXT_SECONDARY).small());
        ui.separator();

        if state.is_loading && state.sessions.is_empty() {
            ui.spinner();
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for session in &state.sessions {
                    session_row(ui, state, session, &mut actions);
                    ui.add_space(2.0);
                }
            });
    });

    actions
}

fn session_row(ui: &mut egui::Ui, state: &ChatState, session: &Session, actions: &mut Vec<UiAction>) {
    let selected = state.is_current(&session.id);
    let editing = state.editing.as_ref().filter(|e| e.id == session.id);

    egui::Frame::default()
        .fill(if selected { BG_SURFACE } else { BG_SECONDARY })
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            if let Some(edit) = editing {
                let mut title = edit.title.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut title)
                        .desired_width(ui.available_width() - 50.0),
                );
                if response.changed() {
                    actions.push(UiAction::EditTitle(title));
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    actions.push(UiAction::CommitEditing);
                }
                ui.horizontal(|ui| {
                    if ui.small_button("Save").clicked() {
                        actions.push(UiAction::CommitEditing);
                    }
                    if ui.small_button("Cancel").clicked()
                        || ui.input(|i| i.key_pressed(egui::Key::Escape))
                    {
                        actions.push(UiAction::CancelEditing);
                    }
                });
                return;
            }

            ui.horizontal(|ui| {
                let title = RichText::new(&session.title).color(TEXT_PRIMARY);
                let title = if selected { title.strong() } else { title };
                if ui
                    .add(egui::Label::new(title).truncate().sense(egui::Sense::click()))
                    .clicked()
                {
                    actions.push(UiAction::SelectSession(session.id.clone()));
                }
                if session.is_favorite() {
                    ui.label(RichText::new("★").color(FAVORITE).small());
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.menu_button("⋯", |ui| {
                        if ui.button("Rename").clicked() {
                            actions.push(UiAction::StartEditing(session.id.clone()));
                            ui.close();
                        }
                        let favorite_label = if session.is_favorite() {
                            "Remove from favorites"
                        } else {
                            "Add to favorites"
                        };
                        if ui.button(favorite_label).clicked() {
                            actions.push(UiAction::ToggleFavorite(session.id.clone()));
                            ui.close();
                        }
                        if ui.button(RichText::new("Delete").color(ERROR)).clicked() {
                            actions.push(UiAction::RequestDelete(session.id.clone()));
                            ui.close();
                        }
                    });
                });
            });

            ui.label(
                RichText::new(format!(
                    "{}  -  {}",
                    session_date(&session.timestamp),
                    file_count_label(session.file_count)
                ))
                .color(TEXT_SECONDARY)
                .small(),
            );
        });
}
