use std::sync::Arc;

use cleargate_classifier::DescriptionClassifier;
use cleargate_core::ReportStore;
use cleargate_reference::{HsCodeIndex, ReferenceData};

use crate::engine::ComplianceEngine;
use crate::error::EngineError;

/// Default number of records evaluated concurrently by the batch driver.
pub const DEFAULT_BATCH_CONCURRENCY: usize = 8;

/// Fluent builder for assembling a [`ComplianceEngine`].
///
/// Reference data, a classifier, and an HS code index must be supplied —
/// the engine refuses to start without its collaborators (no partial
/// service). The report store is optional: without one, reports are returned
/// unpersisted with `id = None`.
pub struct EngineBuilder {
    reference: Option<ReferenceData>,
    classifier: Option<Arc<dyn DescriptionClassifier>>,
    hs_index: Option<Arc<dyn HsCodeIndex>>,
    reports: Option<Arc<dyn ReportStore>>,
    batch_concurrency: usize,
}

impl EngineBuilder {
    /// Create a new builder with all optional fields at their defaults.
    pub fn new() -> Self {
        Self {
            reference: None,
            classifier: None,
            hs_index: None,
            reports: None,
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
        }
    }

    /// Set the loaded reference tables.
    #[must_use]
    pub fn reference(mut self, reference: ReferenceData) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Set the description classifier.
    #[must_use]
    pub fn classifier(mut self, classifier: Arc<dyn DescriptionClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Set the HS code reference-lookup collaborator.
    #[must_use]
    pub fn hs_index(mut self, index: Arc<dyn HsCodeIndex>) -> Self {
        self.hs_index = Some(index);
        self
    }

    /// Set the report persistence collaborator.
    #[must_use]
    pub fn report_store(mut self, store: Arc<dyn ReportStore>) -> Self {
        self.reports = Some(store);
        self
    }

    /// Set how many records the batch driver evaluates concurrently.
    /// Values below 1 are clamped to 1.
    #[must_use]
    pub fn batch_concurrency(mut self, concurrency: usize) -> Self {
        self.batch_concurrency = concurrency.max(1);
        self
    }

    /// Assemble the engine, failing if a required collaborator is missing.
    pub fn build(self) -> Result<ComplianceEngine, EngineError> {
        let reference = self
            .reference
            .ok_or_else(|| EngineError::Configuration("reference data is required".into()))?;
        let classifier = self
            .classifier
            .ok_or_else(|| EngineError::Configuration("a classifier is required".into()))?;
        let hs_index = self
            .hs_index
            .ok_or_else(|| EngineError::Configuration("an HS code index is required".into()))?;
        Ok(ComplianceEngine::new(
            Arc::new(reference),
            classifier,
            hs_index,
            self.reports,
            self.batch_concurrency,
        ))
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use cleargate_classifier::testing::FixedClassifier;
    use cleargate_reference::BaselineLimits;
    use cleargate_store_memory::MemoryHsCodeIndex;

    use super::*;

    #[test]
    fn build_without_reference_fails() {
        let err = EngineBuilder::new()
            .classifier(Arc::new(FixedClassifier::compliant()))
            .hs_index(Arc::new(MemoryHsCodeIndex::default()))
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn build_without_classifier_fails() {
        let err = EngineBuilder::new()
            .reference(ReferenceData::builtin(BaselineLimits::default()))
            .hs_index(Arc::new(MemoryHsCodeIndex::default()))
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn complete_builder_succeeds() {
        let engine = EngineBuilder::new()
            .reference(ReferenceData::builtin(BaselineLimits::default()))
            .classifier(Arc::new(FixedClassifier::compliant()))
            .hs_index(Arc::new(MemoryHsCodeIndex::default()))
            .batch_concurrency(0)
            .build();
        assert!(engine.is_ok());
    }
}
