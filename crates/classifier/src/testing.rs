//! Test doubles for the classifier seam.

use crate::error::ClassifierError;
use crate::DescriptionClassifier;

/// A classifier that returns the same verdict for every description. Useful
/// for exercising the engine without model artifacts.
pub struct FixedClassifier {
    verdict: bool,
}

impl FixedClassifier {
    /// A classifier that always reports the text as compliant.
    pub fn compliant() -> Self {
        Self { verdict: true }
    }

    /// A classifier that always reports the text as non-compliant.
    pub fn non_compliant() -> Self {
        Self { verdict: false }
    }
}

impl DescriptionClassifier for FixedClassifier {
    fn classify(&self, _description: &str) -> Result<bool, ClassifierError> {
        Ok(self.verdict)
    }
}

/// A classifier whose feature extraction always fails structurally. Exercises
/// the "vectorization error" reason path in the verdict composer.
pub struct BrokenVectorizer;

impl DescriptionClassifier for BrokenVectorizer {
    fn classify(&self, _description: &str) -> Result<bool, ClassifierError> {
        Err(ClassifierError::Vectorization(
            "feature vector shape mismatch".into(),
        ))
    }
}
