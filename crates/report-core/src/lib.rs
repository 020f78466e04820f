//! Client-side core of the report agent chat.
//!
//! `state` holds the view-model and its transitions, `controller` runs the
//! commands those transitions emit against the ports in `ports`.

pub mod ports;
pub mod event_bus;
pub mod command;
pub mod reconcile;
pub mod state;
pub mod replies;
pub mod controller;
