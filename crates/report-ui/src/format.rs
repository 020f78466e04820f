//! Display strings for the panels.
//!
//! The backend sends ISO-8601 timestamps, with or without an offset. Anything
//! unparseable is shown verbatim.

use chrono::{DateTime, Local, NaiveDateTime};
use report_types::action::QuickAction;
use report_types::file::{format_file_size, FileAttachment, FileKind};
use report_types::message::AnalysisType;
use crate::theme::file_icon;

fn parse(timestamp: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Date shown under a session title, e.g. `2024-10-01`.
pub fn session_date(timestamp: &str) -> String {
    match parse(timestamp) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => timestamp.to_string(),
    }
}

/// Time shown next to a message, e.g. `09:30`.
pub fn message_time(timestamp: &str) -> String {
    match parse(timestamp) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => timestamp.to_string(),
    }
}

pub fn file_count_label(count: u32) -> String {
    match count {
        1 => "1 file".to_string(),
        n => format!("{} files", n),
    }
}

/// Badge text for a file, e.g. `📊 q3.csv (1.5 KB)`.
pub fn file_label(file: &FileAttachment) -> String {
    format!(
        "{} {} ({})",
        file_icon(FileKind::of(&file.name)),
        file.name,
        format_file_size(file.size)
    )
}

pub fn quick_action_label(action: &QuickAction) -> String {
    match action {
        QuickAction::Upload => "📎 Upload".to_string(),
        QuickAction::Analyze(kind) => match kind {
            AnalysisType::Summarize => "Summarize".to_string(),
            AnalysisType::Trends => "Trends".to_string(),
            AnalysisType::Kpis => "KPIs".to_string(),
            AnalysisType::Actions => "Actions".to_string(),
            AnalysisType::Compare => "Compare".to_string(),
            AnalysisType::Other(tag) => tag.clone(),
        },
    }
}
