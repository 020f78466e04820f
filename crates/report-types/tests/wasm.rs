//! WASM-target tests for report-types.
//!
//! Runs under wasm32-unknown-unknown via `wasm-pack test --node`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use report_types::config::*;
use report_types::file::*;
use report_types::message::*;
use report_types::session::*;

#[wasm_bindgen_test]
fn local_timestamps_work_in_wasm() {
    let session = Session::new("s1", new_analysis_title());
    assert!(!session.timestamp.is_empty());
    assert!(session.title.starts_with("New Analysis "));
}

#[wasm_bindgen_test]
fn local_ids_work_in_wasm() {
    assert_ne!(report_types::local_id(), report_types::local_id());
}

#[wasm_bindgen_test]
fn outgoing_message_wire_shape() {
    let body = OutgoingMessage::new("hello", Vec::new(), Some(AnalysisType::Trends));
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["analysis_type"], "trends");
    assert_eq!(json["content"], "hello");
}

#[wasm_bindgen_test]
fn accepted_extensions_from_default_config() {
    let config = ClientConfig::default();
    assert!(is_accepted_upload("q.pdf", &config.accepted_extensions));
    assert!(!is_accepted_upload("q.docx", &config.accepted_extensions));
}

#[wasm_bindgen_test]
fn file_size_formatting() {
    assert_eq!(format_file_size(2048), "2 KB");
}
