use thiserror::Error;

/// Errors from the tabular input adapter.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A single row could not be coerced into a shipment record. Isolated to
    /// that row; the remaining rows are still processed.
    #[error("row {row}: {message}")]
    Row { row: usize, message: String },
}

/// Errors that can occur during engine assembly or evaluation.
///
/// A processing error is distinct from a `Flagged` compliance verdict: input
/// validation gaps become report reasons, anything here means the evaluation
/// itself could not complete.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The HS code index or another reference collaborator failed.
    #[error("reference error: {0}")]
    Reference(#[from] cleargate_reference::ReferenceError),

    /// The classifier failed outside the vectorization-reason path.
    #[error("classifier error: {0}")]
    Classifier(#[from] cleargate_classifier::ClassifierError),

    /// The persistence collaborator rejected a completed report.
    #[error("store error: {0}")]
    Store(#[from] cleargate_core::StoreError),

    /// A tabular row could not be turned into a shipment record.
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// The engine was assembled without a required collaborator.
    #[error("configuration error: {0}")]
    Configuration(String),
}
