use crate::message::AnalysisType;

/// Shortcut buttons above the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickAction {
    /// Show or hide the upload zone.
    Upload,
    /// Prefill the composer with a canned prompt and tag the next message.
    Analyze(AnalysisType),
}

impl QuickAction {
    /// Parse a button key such as `"upload"` or `"trends"`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "upload" => QuickAction::Upload,
            other => QuickAction::Analyze(AnalysisType::from(other)),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            QuickAction::Upload => "upload",
            QuickAction::Analyze(kind) => kind.as_str(),
        }
    }

    /// Buttons offered by the composer, in display order.
    pub fn toolbar() -> Vec<QuickAction> {
        vec![
            QuickAction::Upload,
            QuickAction::Analyze(AnalysisType::Summarize),
            QuickAction::Analyze(AnalysisType::Trends),
            QuickAction::Analyze(AnalysisType::Kpis),
        ]
    }
}
