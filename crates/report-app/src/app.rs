//! Main egui application — lays out the panels and feeds their actions to
//! the chat controller.

use std::rc::Rc;
use std::time::Duration;

use egui::{self, CentralPanel, SidePanel, TopBottomPanel};

use report_core::controller::ChatController;
use report_core::event_bus::EventBus;
use report_platform::picker::BrowserFilePicker;
use report_platform::runtime::{BrowserSpawner, GlooTimer};
use report_types::message::MessageStatus;
use report_ui::action::{dropped_uploads, UiAction};
use report_ui::panels::{chat, composer, header, overlays, sidebar};
use report_ui::state::UiState;
use report_ui::theme;

use crate::compose::{backend_label, compose, config_from_query};

/// Idle repaint interval; picks up replies that land without user input.
const IDLE_REPAINT: Duration = Duration::from_millis(500);

pub struct ReportApp {
    controller: ChatController,
    notifications: EventBus,
    models: Vec<String>,
    backend_label: String,
    ui_state: UiState,
    first_frame: bool,
}

impl ReportApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let composition = compose(
            config_from_query(&query),
            Rc::new(GlooTimer),
            Rc::new(BrowserSpawner),
        );

        let controller = composition
            .controller
            .with_file_picker(Rc::new(BrowserFilePicker));
        controller.start();

        Self {
            backend_label: backend_label(&controller).to_string(),
            controller,
            notifications: composition.notifications,
            models: composition.config.models,
            ui_state: UiState::new(),
            first_frame: true,
        }
    }

    fn is_busy(&self) -> bool {
        let state = self.controller.state();
        state.is_loading
            || state.uploads_in_flight() > 0
            || state.messages.iter().any(|m| m.status == MessageStatus::Sending)
            || self.ui_state.has_toasts()
    }
}

impl eframe::App for ReportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain notifications from the view-model
        let now = ctx.input(|i| i.time);
        let drained = self.notifications.drain();
        if !drained.is_empty() {
            self.ui_state.push_notifications(drained, now);
        }
        self.ui_state.prune(now);

        let mut actions = Vec::new();

        let uploads = ctx.input(|i| dropped_uploads(&i.raw.dropped_files));
        if !uploads.is_empty() {
            actions.push(UiAction::AddFiles(uploads));
        }

        {
            let state = self.controller.state();

            TopBottomPanel::top("header").show(ctx, |ui| {
                actions.extend(header::header_bar(
                    ui,
                    &state,
                    &self.models,
                    &self.backend_label,
                ));
            });

            if !state.sidebar_collapsed {
                SidePanel::left("sessions")
                    .min_width(220.0)
                    .max_width(320.0)
                    .show(ctx, |ui| {
                        actions.extend(sidebar::sidebar_panel(ui, &state));
                    });
            }

            if state.help_visible {
                SidePanel::right("help")
                    .min_width(240.0)
                    .show(ctx, |ui| {
                        actions.extend(overlays::help_panel(ui));
                    });
            }

            TopBottomPanel::bottom("composer").show(ctx, |ui| {
                ui.add_space(6.0);
                actions.extend(composer::composer_panel(ui, &state));
                ui.add_space(6.0);
            });

            CentralPanel::default().show(ctx, |ui| {
                actions.extend(chat::chat_panel(ui, &state));
            });

            actions.extend(overlays::delete_confirmation(ctx, &state));
        }

        overlays::toasts(ctx, &self.ui_state);

        let acted = !actions.is_empty();
        for action in actions {
            self.controller.update(|state| action.apply(state));
        }

        if acted || self.is_busy() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }
}
