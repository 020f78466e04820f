//! Builds the controller graph from a configuration.
//!
//! Timer and spawner are passed in so the same wiring runs in the browser
//! and under a test executor.

use std::rc::Rc;

use futures::task::LocalSpawn;
use report_core::controller::ChatController;
use report_core::event_bus::EventBus;
use report_core::ports::TimerPort;
use report_core::replies::PollingReplyWatch;
use report_core::state::ChatState;
use report_platform::api::select_backend;
use report_types::config::{BackendKind, ClientConfig};

pub struct Composition {
    pub controller: ChatController,
    pub notifications: EventBus,
    pub config: ClientConfig,
}

pub fn compose(
    config: ClientConfig,
    timer: Rc<dyn TimerPort>,
    spawner: Rc<dyn LocalSpawn>,
) -> Composition {
    let notifications = EventBus::new();
    let api = select_backend(&config);
    let replies = Rc::new(PollingReplyWatch::new(
        api.clone(),
        timer,
        config.reply_poll_delays_ms.clone(),
    ));
    let state = ChatState::new(&config, notifications.clone());
    let controller = ChatController::new(state, api, replies, spawner);

    Composition {
        controller,
        notifications,
        config,
    }
}

/// Label for the adapter actually selected; an invalid HTTP config falls
/// back to the demo backend.
pub fn backend_label(controller: &ChatController) -> &'static str {
    match controller.backend_name() {
        "memory" => BackendKind::Memory.label(),
        _ => BackendKind::Http.label(),
    }
}

/// Overlay `?backend=demo&api=http://host/api` style page parameters onto
/// the defaults. Unknown keys and values are ignored.
pub fn config_from_query(query: &str) -> ClientConfig {
    let mut config = ClientConfig::default();
    for pair in query.trim_start_matches('?').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match (key, value) {
            ("backend", "demo" | "memory") => config.backend = BackendKind::Memory,
            ("backend", "http") => config.backend = BackendKind::Http,
            ("api", base) if !base.is_empty() => config.api_base = base.to_string(),
            _ => log::debug!("Ignoring page parameter {}", pair),
        }
    }
    config
}
