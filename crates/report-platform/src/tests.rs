#[cfg(test)]
mod tests {
    use crate::api::http::error_detail;
    use crate::api::memory::canned_reply;
    use crate::api::{select_backend, MemoryReportApi};
    use crate::picker::accept_attribute;
    use async_trait::async_trait;
    use futures::executor::{block_on, LocalPool};
    use report_core::controller::ChatController;
    use report_core::event_bus::EventBus;
    use report_core::ports::*;
    use report_core::replies::PollingReplyWatch;
    use report_core::state::ChatState;
    use report_types::config::{BackendKind, ClientConfig};
    use report_types::file::*;
    use report_types::message::*;
    use report_types::ChatError;
    use std::rc::Rc;

    fn csv(name: &str) -> FileUpload {
        FileUpload::new(name, "text/csv", b"region,revenue\nnorth,10".to_vec())
    }

    // ─── MemoryReportApi Tests ───────────────────────────────

    #[test]
    fn test_memory_demo_data_is_seeded() {
        let api = MemoryReportApi::with_demo_data();
        let sessions = block_on(api.list_sessions()).unwrap();
        let titles: Vec<&str> = sessions.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Q3 Sales Analysis", "Marketing Report Review", "Financial Dashboard"]
        );

        let history = block_on(api.list_messages("1")).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].role, Role::User);
        assert_eq!(history[1].content, "What are the main trends in revenue?");
    }

    #[test]
    fn test_memory_create_and_get() {
        let api = MemoryReportApi::new();
        let created = block_on(api.create_session("Board pack")).unwrap();
        assert_eq!(created.title, "Board pack");
        assert_eq!(created.file_count, 0);
        assert!(!created.is_favorite());

        let fetched = block_on(api.get_session(&created.id)).unwrap();
        assert_eq!(fetched, created);
        assert!(block_on(api.list_messages(&created.id)).unwrap().is_empty());
    }

    #[test]
    fn test_memory_unknown_ids_are_404() {
        let api = MemoryReportApi::new();
        for result in [
            block_on(api.get_session("ghost")).map(|_| ()),
            block_on(api.update_session("ghost", "x")).map(|_| ()),
            block_on(api.delete_session("ghost")),
            block_on(api.toggle_favorite("ghost")).map(|_| ()),
            block_on(api.list_messages("ghost")).map(|_| ()),
            block_on(api.delete_file("ghost")),
        ] {
            assert_eq!(result.unwrap_err().status(), Some(404));
        }
        let send = block_on(api.send_message("ghost", OutgoingMessage::new("hi", Vec::new(), None)));
        assert!(matches!(send, Err(ChatError::Server { status: 404, .. })));
    }

    #[test]
    fn test_memory_update_accepts_empty_title() {
        let api = MemoryReportApi::new();
        let created = block_on(api.create_session("Old")).unwrap();
        let updated = block_on(api.update_session(&created.id, "")).unwrap();
        assert_eq!(updated.title, "");
        assert_eq!(updated.timestamp, created.timestamp);
    }

    #[test]
    fn test_memory_toggle_favorite_flips() {
        let api = MemoryReportApi::new();
        let created = block_on(api.create_session("S")).unwrap();
        assert!(block_on(api.toggle_favorite(&created.id)).unwrap().is_favorite());
        assert!(!block_on(api.toggle_favorite(&created.id)).unwrap().is_favorite());
    }

    #[test]
    fn test_memory_delete_removes_messages() {
        let api = MemoryReportApi::with_demo_data();
        block_on(api.delete_session("2")).unwrap();
        assert_eq!(block_on(api.list_sessions()).unwrap().len(), 2);
        assert!(block_on(api.list_messages("2")).is_err());
    }

    #[test]
    fn test_memory_send_counts_files_and_replies() {
        let api = MemoryReportApi::new();
        let created = block_on(api.create_session("S")).unwrap();
        let a = block_on(api.upload_file(csv("a.csv"))).unwrap();
        let b = block_on(api.upload_file(csv("b.csv"))).unwrap();

        let outgoing = OutgoingMessage::new("Compare", vec![a, b], Some(AnalysisType::Compare));
        let stored = block_on(api.send_message(&created.id, outgoing)).unwrap();
        assert_eq!(stored.role, Role::User);
        assert_eq!(stored.status, MessageStatus::Sent);
        assert_eq!(stored.attachments().len(), 2);
        assert_eq!(stored.analysis_type, Some(AnalysisType::Compare));

        let session = block_on(api.get_session(&created.id)).unwrap();
        assert_eq!(session.file_count, 2);

        let history = block_on(api.list_messages(&created.id)).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, stored.id);
        assert_eq!(history[1].role, Role::Assistant);
        assert_eq!(history[1].content, canned_reply(&AnalysisType::Compare, 2));
    }

    #[test]
    fn test_memory_upload_metadata() {
        let api = MemoryReportApi::new();
        let stored = block_on(api.upload_file(csv("q3.csv"))).unwrap();
        assert_eq!(stored.name, "q3.csv");
        assert_eq!(stored.size, 23);
        assert_eq!(stored.mime_type, "text/csv");
        assert_eq!(stored.upload_progress, 100);
        assert!(stored.is_uploaded());

        let untyped = block_on(api.upload_file(FileUpload::new("x.vb", "", vec![1]))).unwrap();
        assert_eq!(untyped.mime_type, "application/octet-stream");

        block_on(api.delete_file(&stored.id)).unwrap();
        assert!(block_on(api.delete_file(&stored.id)).is_err());
    }

    #[test]
    fn test_canned_reply_wording() {
        assert_eq!(
            canned_reply(&AnalysisType::Summarize, 0),
            "Demo mode: here is a summary based on our conversation so far."
        );
        assert_eq!(
            canned_reply(&AnalysisType::Trends, 1),
            "Demo mode: here is the key trends based on the attached file."
        );
        assert!(canned_reply(&AnalysisType::Other("x".into()), 3).contains("the 3 attached files"));
    }

    // ─── HTTP Helper Tests ───────────────────────────────────

    #[test]
    fn test_error_detail_extraction() {
        assert_eq!(
            error_detail(r#"{"detail":"Session with ID x not found"}"#),
            "Session with ID x not found"
        );
        assert_eq!(
            error_detail(r#"{"detail":[{"msg":"field required"}]}"#),
            r#"[{"msg":"field required"}]"#
        );
        assert_eq!(error_detail("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_detail(""), "");
    }

    #[test]
    fn test_select_backend() {
        let demo = ClientConfig {
            backend: BackendKind::Memory,
            ..ClientConfig::default()
        };
        assert_eq!(select_backend(&demo).backend_name(), "memory");

        let http = ClientConfig::default();
        assert_eq!(select_backend(&http).backend_name(), "http");

        let broken = ClientConfig {
            api_base: "  ".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(select_backend(&broken).backend_name(), "memory");
    }

    // ─── Controller + Demo Backend ───────────────────────────

    struct NoWait;

    #[async_trait(?Send)]
    impl TimerPort for NoWait {
        async fn sleep(&self, _ms: u64) {}
    }

    fn demo_controller(pool: &LocalPool) -> ChatController {
        let config = ClientConfig::default();
        let api: Rc<dyn ReportApiPort> = Rc::new(MemoryReportApi::with_demo_data());
        let replies = Rc::new(PollingReplyWatch::new(
            api.clone(),
            Rc::new(NoWait),
            config.reply_poll_delays_ms.clone(),
        ));
        ChatController::new(
            ChatState::new(&config, EventBus::new()),
            api,
            replies,
            Rc::new(pool.spawner()),
        )
    }

    #[test]
    fn test_demo_backend_select_and_reply() {
        let mut pool = LocalPool::new();
        let controller = demo_controller(&pool);
        controller.start();
        pool.run_until_stalled();
        assert_eq!(controller.state().sessions.len(), 3);

        controller.update(|state| state.select_session("1"));
        pool.run_until_stalled();
        assert_eq!(controller.state().messages.len(), 3);
        assert!(!controller.state().welcome_visible);

        controller.update(|state| {
            state.trigger_action(report_types::action::QuickAction::Analyze(AnalysisType::Kpis));
            state.send()
        });
        pool.run_until_stalled();

        let state = controller.state();
        assert_eq!(state.messages.len(), 5);
        assert!(state.messages[3].id.starts_with("local-"));
        assert_eq!(state.messages[3].status, MessageStatus::Sent);
        assert_eq!(
            state.messages[4].content,
            canned_reply(&AnalysisType::Kpis, 0)
        );
    }

    #[test]
    fn test_demo_backend_first_message_with_upload() {
        let mut pool = LocalPool::new();
        let controller = demo_controller(&pool);
        controller.start();
        pool.run_until_stalled();

        controller.update(|state| state.select_files(vec![csv("q3.csv")]));
        pool.run_until_stalled();
        controller.update(|state| {
            state.set_input("What stands out?");
            state.send()
        });
        pool.run_until_stalled();

        let state = controller.state();
        assert_eq!(state.sessions.len(), 4);
        let current = state.current_session().unwrap();
        assert_eq!(current.id, state.sessions[0].id);
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].attachments().len(), 1);
        assert!(state.pending_files.is_empty());
        assert_eq!(state.messages[1].content, canned_reply(&AnalysisType::Summarize, 1));
    }

    // ─── File Picker Tests ───────────────────────────────────

    #[test]
    fn test_accept_attribute_from_configured_extensions() {
        let config = ClientConfig::default();
        assert_eq!(
            accept_attribute(&config.accepted_extensions),
            ".xlsx,.xls,.csv,.pdf,.vb"
        );
        assert_eq!(accept_attribute(&[".csv".to_string()]), ".csv");
        assert_eq!(accept_attribute(&[]), "");
    }
}
