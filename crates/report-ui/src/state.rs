//! UI-only state that lives outside the view-model.
//! Toasts are fed from the notification bus each frame and expire on their own.

use report_types::event::{Notification, NotifyLevel};

/// How long a toast stays on screen, in seconds.
pub const TOAST_SECONDS: f64 = 4.0;

/// Most toasts shown at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub level: NotifyLevel,
    pub text: String,
    pub expires_at: f64,
}

#[derive(Default)]
pub struct UiState {
    pub toasts: Vec<Toast>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue freshly drained notifications. `now` is in seconds.
    pub fn push_notifications(&mut self, notifications: Vec<Notification>, now: f64) {
        for n in notifications {
            self.toasts.push(Toast {
                level: n.level,
                text: n.text,
                expires_at: now + TOAST_SECONDS,
            });
        }
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
    }

    /// Drop expired toasts.
    pub fn prune(&mut self, now: f64) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }
}
