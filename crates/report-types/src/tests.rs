#[cfg(test)]
mod tests {
    use crate::action::*;
    use crate::config::*;
    use crate::error::*;
    use crate::event::*;
    use crate::file::*;
    use crate::message::*;
    use crate::session::*;

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_deserialize_server_shape() {
        let json = r#"{
            "id": "3f1c",
            "title": "Q3 Sales",
            "timestamp": "2024-10-01T09:30:00.123456",
            "fileCount": 2,
            "isFavorite": true,
            "messages": null
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, "3f1c");
        assert_eq!(session.file_count, 2);
        assert!(session.is_favorite());
        assert!(session.messages.is_none());
    }

    #[test]
    fn test_session_missing_optional_fields() {
        let json = r#"{"id": "a", "title": "t", "timestamp": "now"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.file_count, 0);
        assert_eq!(session.is_favorite, None);
        assert!(!session.is_favorite());
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let session = Session::new("s1", "Budget");
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"fileCount\":0"));
        assert!(json.contains("\"isFavorite\":false"));
        assert!(!json.contains("messages"));
    }

    #[test]
    fn test_new_analysis_title_prefix() {
        assert!(new_analysis_title().starts_with("New Analysis "));
    }

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_outgoing_is_sending() {
        let msg = Message::outgoing("local-1", "Summarize Q3", Vec::new());
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.status, MessageStatus::Sending);
        assert!(msg.attachments.is_none());
        assert!(msg.attachments().is_empty());
        assert!(!msg.is_confirmed());
    }

    #[test]
    fn test_message_deserialize_server_shape() {
        let json = r#"{
            "id": "m1",
            "role": "assistant",
            "content": "Revenue grew 23%",
            "timestamp": "2024-10-01T09:30:00",
            "attachments": null,
            "status": "sent",
            "isStreaming": null,
            "analysis_type": "trends"
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.status, MessageStatus::Sent);
        assert_eq!(msg.analysis_type, Some(AnalysisType::Trends));
        assert!(msg.is_confirmed());
    }

    #[test]
    fn test_message_status_defaults_to_sent() {
        let json = r#"{"id": "m1", "role": "user", "content": "hi", "timestamp": "t"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.status, MessageStatus::Sent);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), r#""assistant""#);
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), r#""system""#);
    }

    #[test]
    fn test_outgoing_message_defaults_analysis_type() {
        let body = OutgoingMessage::new("hello", Vec::new(), None);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["analysis_type"], "summarize");
        assert_eq!(json["role"], "user");
        assert!(json.get("attachments").is_none());
    }

    #[test]
    fn test_outgoing_message_with_attachments() {
        let file = FileAttachment {
            id: "f1".to_string(),
            name: "q3.xlsx".to_string(),
            size: 10,
            mime_type: "application/vnd.ms-excel".to_string(),
            upload_progress: 100,
            status: UploadStatus::Uploaded,
        };
        let body = OutgoingMessage::new("look", vec![file], Some(AnalysisType::Kpis));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["analysis_type"], "kpis");
        assert_eq!(json["attachments"][0]["uploadProgress"], 100);
        assert_eq!(json["attachments"][0]["type"], "application/vnd.ms-excel");
    }

    // ─── AnalysisType / QuickAction Tests ────────────────────

    #[test]
    fn test_analysis_type_known_tags() {
        for tag in ["summarize", "trends", "kpis", "actions", "compare"] {
            let kind = AnalysisType::from(tag);
            assert!(!matches!(kind, AnalysisType::Other(_)), "{} parsed as Other", tag);
            assert_eq!(kind.as_str(), tag);
        }
    }

    #[test]
    fn test_analysis_type_unknown_tag_is_kept() {
        let kind = AnalysisType::from("forecast");
        assert_eq!(kind, AnalysisType::Other("forecast".to_string()));
        assert_eq!(kind.prompt(), "Processing your request...");
        assert_eq!(serde_json::to_string(&kind).unwrap(), r#""forecast""#);
    }

    #[test]
    fn test_analysis_type_prompts() {
        assert_eq!(
            AnalysisType::Summarize.prompt(),
            "Please provide a comprehensive summary of the uploaded reports."
        );
        assert_eq!(
            AnalysisType::Compare.prompt(),
            "Compare the uploaded reports and highlight differences."
        );
    }

    #[test]
    fn test_quick_action_from_key() {
        assert_eq!(QuickAction::from_key("upload"), QuickAction::Upload);
        assert_eq!(
            QuickAction::from_key("kpis"),
            QuickAction::Analyze(AnalysisType::Kpis)
        );
        assert_eq!(QuickAction::from_key("trends").key(), "trends");
    }

    #[test]
    fn test_quick_action_toolbar_starts_with_upload() {
        let toolbar = QuickAction::toolbar();
        assert_eq!(toolbar[0], QuickAction::Upload);
        assert_eq!(toolbar.len(), 4);
    }

    // ─── File Tests ──────────────────────────────────────────

    #[test]
    fn test_file_attachment_pending() {
        let upload = FileUpload::new("report.pdf", "application/pdf", vec![0u8; 42]);
        let att = FileAttachment::pending("tmp-1", &upload);
        assert_eq!(att.size, 42);
        assert_eq!(att.upload_progress, 0);
        assert_eq!(att.status, UploadStatus::Uploading);
        assert!(!att.is_uploaded());
    }

    #[test]
    fn test_file_attachment_server_defaults() {
        let json = r#"{"id": "f1", "name": "a.csv", "size": 3, "type": "text/csv"}"#;
        let att: FileAttachment = serde_json::from_str(json).unwrap();
        assert_eq!(att.upload_progress, 100);
        assert_eq!(att.status, UploadStatus::Uploaded);
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("Q3.XLSX"), Some("xlsx".to_string()));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension(".bashrc"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn test_is_accepted_upload() {
        let accepted = ClientConfig::default().accepted_extensions;
        assert!(is_accepted_upload("sales.xlsx", &accepted));
        assert!(is_accepted_upload("legacy.XLS", &accepted));
        assert!(is_accepted_upload("macro.vb", &accepted));
        assert!(!is_accepted_upload("photo.png", &accepted));
        assert!(!is_accepted_upload("noext", &accepted));
    }

    #[test]
    fn test_is_accepted_upload_with_dotted_config() {
        let accepted = vec![".csv".to_string()];
        assert!(is_accepted_upload("a.csv", &accepted));
    }

    #[test]
    fn test_file_kind() {
        assert_eq!(FileKind::of("a.csv"), FileKind::Spreadsheet);
        assert_eq!(FileKind::of("a.pdf"), FileKind::Pdf);
        assert_eq!(FileKind::of("a.vb"), FileKind::Text);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
    }

    // ─── Notification Tests ──────────────────────────────────

    #[test]
    fn test_notification_constructors() {
        assert_eq!(Notification::info("x").level, NotifyLevel::Info);
        assert_eq!(Notification::success("x").level, NotifyLevel::Success);
        assert_eq!(Notification::warning("x").level, NotifyLevel::Warning);
        let err = Notification::error("Failed to load sessions");
        assert_eq!(err.level, NotifyLevel::Error);
        assert_eq!(err.text, "Failed to load sessions");
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "http://localhost:8000/api");
        assert_eq!(config.backend, BackendKind::Http);
        assert_eq!(config.reply_poll_delays_ms, vec![1000, 3000]);
        assert_eq!(config.default_model(), "GPT-4o");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_endpoint_joins_slashes() {
        let mut config = ClientConfig::default();
        config.api_base = "http://host/api/".to_string();
        assert_eq!(config.endpoint("/sessions"), "http://host/api/sessions");
        assert_eq!(config.endpoint("files/upload"), "http://host/api/files/upload");
    }

    #[test]
    fn test_config_validate_rejects_empty_base() {
        let mut config = ClientConfig::default();
        config.api_base = "  ".to_string();
        assert!(matches!(config.validate(), Err(ChatError::Config(_))));

        config.backend = BackendKind::Memory;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = ClientConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(
            ChatError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ChatError::server(404, "Session with ID x not found").to_string(),
            "Server error 404: Session with ID x not found"
        );
    }

    #[test]
    fn test_error_status() {
        assert_eq!(ChatError::server(500, "boom").status(), Some(500));
        assert_eq!(ChatError::Network("x".to_string()).status(), None);
    }

    #[test]
    fn test_error_from_serde() {
        let err: ChatError = serde_json::from_str::<Session>("{").unwrap_err().into();
        assert!(matches!(err, ChatError::Serialization(_)));
    }

    #[test]
    fn test_local_ids_are_unique() {
        let a = crate::local_id();
        let b = crate::local_id();
        assert_ne!(a, b);
        assert!(a.starts_with("local-"));
    }
}
