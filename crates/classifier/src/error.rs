use thiserror::Error;

/// Errors from the text-classification adapter.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// A model artifact file was missing or malformed. Fatal at start-up:
    /// the system must not serve without a loaded classifier.
    #[error("classifier artifact error: {0}")]
    Artifact(String),

    /// Feature extraction produced a structurally invalid vector (vocabulary
    /// indices out of range for the model weights). Surfaced as a report
    /// reason, not a crash.
    #[error("vectorization error: {0}")]
    Vectorization(String),
}
