//! egui rendering of the chat view-model.
//!
//! Panels read `ChatState` and return [`action::UiAction`]s; they never call
//! the backend themselves.

pub mod action;
pub mod format;
pub mod panels;
pub mod state;
pub mod theme;
