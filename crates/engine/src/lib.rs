pub mod builder;
pub mod engine;
pub mod error;
pub mod ingest;

pub use builder::EngineBuilder;
pub use engine::ComplianceEngine;
pub use error::{EngineError, IngestError};
pub use ingest::read_csv;
