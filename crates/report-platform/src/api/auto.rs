//! Pick the report backend named by the configuration.
//!
//! Priority: configured backend → Memory (fallback when the HTTP settings
//! are unusable).

use std::rc::Rc;
use report_core::ports::ReportApiPort;
use report_types::config::{BackendKind, ClientConfig};
use super::{HttpReportApi, MemoryReportApi};

/// Returns a trait object so callers are backend-agnostic.
pub fn select_backend(config: &ClientConfig) -> Rc<dyn ReportApiPort> {
    match config.backend {
        BackendKind::Http => match config.validate() {
            Ok(()) => {
                log::info!("Report backend: HTTP ({})", config.api_base);
                Rc::new(HttpReportApi::new(config.clone()))
            }
            Err(e) => {
                log::warn!("HTTP backend unusable ({}), falling back to demo data", e);
                Rc::new(MemoryReportApi::with_demo_data())
            }
        },
        BackendKind::Memory => {
            log::info!("Report backend: in-memory demo");
            Rc::new(MemoryReportApi::with_demo_data())
        }
    }
}
