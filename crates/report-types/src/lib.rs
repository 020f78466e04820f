pub mod session;
pub mod message;
pub mod file;
pub mod action;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::ChatError;
pub type Result<T> = std::result::Result<T, ChatError>;

/// Fresh client-local identifier for optimistic messages and uploads.
pub fn local_id() -> String {
    format!("local-{}", uuid::Uuid::new_v4())
}

/// Current time in the format used for locally created records.
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
