pub mod http;
pub mod memory;
pub mod auto;

pub use http::HttpReportApi;
pub use memory::MemoryReportApi;
pub use auto::select_backend;
