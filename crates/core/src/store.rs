use async_trait::async_trait;
use thiserror::Error;

use crate::report::ComplianceReport;

/// Errors from a report persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or failed the operation.
    #[error("store backend error: {0}")]
    Backend(String),

    /// A stored report could not be serialized or deserialized.
    #[error("store serialization error: {0}")]
    Serialization(String),
}

/// Persistence collaborator for completed compliance reports.
///
/// The engine treats the returned identifier as opaque and attaches it to the
/// report after a successful insert. Implementations must be `Send + Sync`
/// and safe for concurrent access; the engine may persist batch results
/// concurrently.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Persist a completed report and return its durable identifier.
    async fn insert(&self, report: &ComplianceReport) -> Result<String, StoreError>;

    /// Fetch a single report by its identifier.
    async fn get(&self, id: &str) -> Result<Option<ComplianceReport>, StoreError>;

    /// List all persisted reports in insertion order.
    async fn list(&self) -> Result<Vec<ComplianceReport>, StoreError>;
}
