use serde::{Deserialize, Serialize};
use crate::file::ACCEPTED_EXTENSIONS;
use crate::{ChatError, Result};

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub api_base: String,
    pub backend: BackendKind,
    /// Delays before each re-fetch that picks up the assistant reply.
    pub reply_poll_delays_ms: Vec<u64>,
    /// Models offered in the header; the first one is selected initially.
    pub models: Vec<String>,
    pub accepted_extensions: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            backend: BackendKind::Http,
            reply_poll_delays_ms: vec![1000, 3000],
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.backend == BackendKind::Http && self.api_base.trim().is_empty() {
            return Err(ChatError::Config("api_base must not be empty".to_string()));
        }
        if self.models.is_empty() {
            return Err(ChatError::Config("at least one model is required".to_string()));
        }
        Ok(())
    }

    pub fn default_model(&self) -> String {
        self.models
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_MODELS[0].to_string())
    }

    /// Join a path such as `/sessions` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendKind {
    /// Talk to the REST backend over fetch.
    Http,
    /// In-process demo backend seeded with sample sessions.
    Memory,
}

impl BackendKind {
    pub fn label(&self) -> &'static str {
        match self {
            BackendKind::Http => "HTTP",
            BackendKind::Memory => "Demo",
        }
    }
}

const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

const DEFAULT_MODELS: &[&str] = &["GPT-4o", "GPT-4o mini", "Claude 3.5 Sonnet"];
