#[cfg(test)]
mod tests {
    use crate::compose::*;
    use async_trait::async_trait;
    use futures::executor::LocalPool;
    use report_core::ports::TimerPort;
    use report_types::config::{BackendKind, ClientConfig};
    use report_types::event::NotifyLevel;
    use std::rc::Rc;

    struct NoWait;

    #[async_trait(?Send)]
    impl TimerPort for NoWait {
        async fn sleep(&self, _ms: u64) {}
    }

    fn demo_config() -> ClientConfig {
        ClientConfig {
            backend: BackendKind::Memory,
            ..ClientConfig::default()
        }
    }

    // ─── Page Parameter Tests ────────────────────────────────

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(config_from_query(""), ClientConfig::default());
        assert_eq!(config_from_query("?"), ClientConfig::default());
    }

    #[test]
    fn test_query_selects_demo_backend() {
        assert_eq!(config_from_query("?backend=demo").backend, BackendKind::Memory);
        assert_eq!(config_from_query("backend=memory").backend, BackendKind::Memory);
        assert_eq!(config_from_query("?backend=http").backend, BackendKind::Http);
    }

    #[test]
    fn test_query_overrides_api_base() {
        let config = config_from_query("?backend=http&api=https://reports.example.com/api");
        assert_eq!(config.api_base, "https://reports.example.com/api");
        assert_eq!(
            config.endpoint("/sessions"),
            "https://reports.example.com/api/sessions"
        );
    }

    #[test]
    fn test_query_ignores_unknown_pairs() {
        let config = config_from_query("?backend=grpc&api=&theme=dark&flag");
        assert_eq!(config, ClientConfig::default());
    }

    // ─── Composition Tests ───────────────────────────────────

    #[test]
    fn test_compose_demo_loads_sessions() {
        let mut pool = LocalPool::new();
        let composition = compose(demo_config(), Rc::new(NoWait), Rc::new(pool.spawner()));
        assert_eq!(composition.controller.backend_name(), "memory");

        composition.controller.start();
        pool.run_until_stalled();

        let state = composition.controller.state();
        assert_eq!(state.sessions.len(), 3);
        assert!(state.is_draft());
        assert_eq!(state.selected_model, composition.config.default_model());
    }

    #[test]
    fn test_compose_invalid_http_falls_back_to_demo() {
        let pool = LocalPool::new();
        let config = ClientConfig {
            api_base: "  ".to_string(),
            ..ClientConfig::default()
        };
        let composition = compose(config, Rc::new(NoWait), Rc::new(pool.spawner()));
        assert_eq!(composition.controller.backend_name(), "memory");
        assert_eq!(backend_label(&composition.controller), "Demo");
    }

    #[test]
    fn test_backend_label_for_http() {
        let pool = LocalPool::new();
        let composition = compose(
            ClientConfig::default(),
            Rc::new(NoWait),
            Rc::new(pool.spawner()),
        );
        assert_eq!(backend_label(&composition.controller), "HTTP");
    }

    #[test]
    fn test_compose_shares_notification_bus() {
        let mut pool = LocalPool::new();
        let composition = compose(demo_config(), Rc::new(NoWait), Rc::new(pool.spawner()));
        composition.controller.start();
        pool.run_until_stalled();

        composition.controller.update(|state| state.rename("2", "Campaign Review"));
        pool.run_until_stalled();

        let notes = composition.notifications.drain();
        assert!(notes.iter().any(|n| n.level == NotifyLevel::Success));
        assert!(!composition.notifications.has_pending());
        assert_eq!(
            composition.controller.state().session("2").map(|s| s.title.as_str()),
            Some("Campaign Review")
        );
    }

    #[test]
    fn test_compose_full_conversation() {
        let mut pool = LocalPool::new();
        let composition = compose(demo_config(), Rc::new(NoWait), Rc::new(pool.spawner()));
        let controller = &composition.controller;
        controller.start();
        pool.run_until_stalled();

        controller.update(|state| {
            state.set_input("Summarize the pipeline");
            state.send()
        });
        pool.run_until_stalled();

        let state = controller.state();
        assert_eq!(state.sessions.len(), 4);
        assert!(!state.is_draft());
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].content, "Summarize the pipeline");
        assert!(state.input_text.is_empty());
    }
}
