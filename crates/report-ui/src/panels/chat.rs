//! Chat panel — welcome card and the current session's messages.

use egui::{self, Color32, RichText, ScrollArea};
use report_core::state::ChatState;
use report_types::file::FileAttachment;
use report_types::message::{Message, MessageStatus, Role};
use crate::action::UiAction;
use crate::format::{file_label, message_time};
use crate::theme::*;

pub fn chat_panel(ui: &mut egui::Ui, state: &ChatState) -> Vec<UiAction> {
    let mut actions = Vec::new();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if state.welcome_visible {
                welcome_card(ui, &mut actions);
                ui.add_space(8.0);
            }

            for message in &state.messages {
                render_message(ui, message);
                ui.add_space(4.0);
            }

            if state.is_loading && !state.is_draft() {
                ui.spinner();
            }
        });

    actions
}

fn welcome_card(ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Welcome to the Report Agent").strong().color(TEXT_PRIMARY));
                if ui.small_button("✕").clicked() {
                    actions.push(UiAction::DismissWelcome);
                }
            });
            ui.label(
                RichText::new(
                    "Upload spreadsheets, CSVs or PDFs and ask for a summary, trends or KPIs.",
                )
                .color(TEXT_SECONDARY),
            );
        });
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let error_bg = Color32::from_rgb(50, 20, 20);
    let (label, label_color) = match message.role {
        Role::User => ("You", ACCENT),
        Role::Assistant => ("Report Agent", SUCCESS),
        Role::System => ("System", WARNING),
    };
    let bg = match (message.role, message.status) {
        (_, MessageStatus::Error) => error_bg,
        (Role::User, _) => BG_USER,
        _ => BG_SECONDARY,
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).color(label_color).strong().small());
                ui.label(
                    RichText::new(message_time(&message.timestamp))
                        .color(TEXT_SECONDARY)
                        .small(),
                );
                match message.status {
                    MessageStatus::Sending => {
                        ui.label(RichText::new("sending…").color(TEXT_SECONDARY).small());
                    }
                    MessageStatus::Error => {
                        ui.label(RichText::new("failed to send").color(ERROR).small());
                    }
                    MessageStatus::Sent => {}
                }
                if message.is_streaming == Some(true) {
                    ui.spinner();
                }
            });

            if !message.content.is_empty() {
                ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
            }

            for file in message.attachments() {
                file_badge(ui, file);
            }
        });
}

fn file_badge(ui: &mut egui::Ui, file: &FileAttachment) {
    ui.label(
        RichText::new(file_label(file))
            .color(TEXT_SECONDARY)
            .small(),
    );
}
