//! Header bar — session title, model picker, help toggle.

use egui::{self, Align, Layout, RichText};
use report_core::state::ChatState;
use crate::action::UiAction;
use crate::theme::*;

pub fn header_bar(
    ui: &mut egui::Ui,
    state: &ChatState,
    models: &[String],
    backend_label: &str,
) -> Vec<UiAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        if state.sidebar_collapsed && ui.small_button("»").on_hover_text("Show sessions").clicked() {
            actions.push(UiAction::ToggleSidebar);
        }

        let title = state
            .current_session()
            .map(|s| s.title.as_str())
            .unwrap_or("New Analysis");
        ui.label(RichText::new(title).strong().color(TEXT_PRIMARY).size(16.0));

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.selectable_label(state.help_visible, "Help").clicked() {
                actions.push(UiAction::ToggleHelp);
            }

            egui::ComboBox::from_id_salt("model_picker")
                .selected_text(&state.selected_model)
                .show_ui(ui, |ui| {
                    for model in models {
                        if ui
                            .selectable_label(state.selected_model == *model, model)
                            .clicked()
                        {
                            actions.push(UiAction::SelectModel(model.clone()));
                        }
                    }
                });

            ui.label(
                RichText::new(format!("Backend: {}", backend_label))
                    .color(TEXT_SECONDARY)
                    .small(),
            );
        });
    });

    actions
}
