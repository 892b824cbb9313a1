pub mod error;
pub mod linear;
pub mod testing;

pub use error::ClassifierError;
pub use linear::LinearClassifier;

/// Opaque scoring capability over a free-text product description.
///
/// The concrete model family (and how it was trained and loaded) is hidden
/// behind this trait so it can be swapped without touching the rule evaluator
/// or the verdict composer. Implementations are read-only after construction
/// and shared across concurrent evaluations.
pub trait DescriptionClassifier: Send + Sync {
    /// Score a description. `Ok(true)` means the text reads as compliant.
    ///
    /// A structural fault in feature extraction returns
    /// [`ClassifierError::Vectorization`], which the verdict composer reports
    /// as a reason rather than a failure.
    fn classify(&self, description: &str) -> Result<bool, ClassifierError>;
}
