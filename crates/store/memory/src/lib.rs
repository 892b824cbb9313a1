pub mod hscode;
pub mod store;

pub use hscode::MemoryHsCodeIndex;
pub use store::MemoryReportStore;
