use async_trait::async_trait;

use crate::error::ReferenceError;

/// Reference-lookup collaborator for HS codes.
///
/// The engine only needs to know whether a declared code exists in the
/// reference records — the matched record's contents are never consulted.
/// Implementations must be `Send + Sync`; lookups may run concurrently
/// across batch records.
#[async_trait]
pub trait HsCodeIndex: Send + Sync {
    /// Whether a record for `code` exists in the reference data.
    async fn exists(&self, code: &str) -> Result<bool, ReferenceError>;
}
