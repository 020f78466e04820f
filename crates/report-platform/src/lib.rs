//! Browser adapters for the report-core ports.

pub mod api;
pub mod picker;
pub mod runtime;

#[cfg(test)]
mod tests;
