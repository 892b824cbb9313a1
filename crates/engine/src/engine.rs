use std::sync::Arc;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use tracing::{debug, instrument};

use cleargate_classifier::{ClassifierError, DescriptionClassifier};
use cleargate_core::{ComplianceReport, ReportStore, ShipmentRecord};
use cleargate_reference::{HsCodeIndex, ReferenceData};
use cleargate_rules::evaluate;

use crate::error::{EngineError, IngestError};

/// Reason appended when the classifier predicts a non-compliant description.
pub const CLASSIFIER_REASON: &str = "Product description does not meet compliance standards.";

/// Reason appended when feature extraction fails structurally.
pub const VECTORIZATION_REASON: &str = "Error in vectorization. Check the classifier artifacts.";

/// The compliance evaluation engine.
///
/// Stateless aside from reads of immutable reference data and the loaded
/// classifier, so a single instance is shared freely across concurrent
/// evaluations without locking. Assemble via [`crate::EngineBuilder`].
pub struct ComplianceEngine {
    reference: Arc<ReferenceData>,
    classifier: Arc<dyn DescriptionClassifier>,
    hs_index: Arc<dyn HsCodeIndex>,
    reports: Option<Arc<dyn ReportStore>>,
    batch_concurrency: usize,
}

impl std::fmt::Debug for ComplianceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplianceEngine")
            .field("reports", &self.reports.is_some())
            .field("batch_concurrency", &self.batch_concurrency)
            .finish_non_exhaustive()
    }
}

impl ComplianceEngine {
    pub(crate) fn new(
        reference: Arc<ReferenceData>,
        classifier: Arc<dyn DescriptionClassifier>,
        hs_index: Arc<dyn HsCodeIndex>,
        reports: Option<Arc<dyn ReportStore>>,
        batch_concurrency: usize,
    ) -> Self {
        Self {
            reference,
            classifier,
            hs_index,
            reports,
            batch_concurrency,
        }
    }

    /// Evaluate one shipment record into a compliance report.
    ///
    /// Pipeline: normalize → HS code lookup → rule evaluation → classifier →
    /// verdict composition → persistence (when a store is configured, the
    /// assigned id is attached to the returned report).
    ///
    /// Rule-derived reasons always precede the classifier-derived one; the
    /// report is `Compliant` iff the combined list is empty.
    #[instrument(skip_all, fields(item = %record.item_name))]
    pub async fn check(&self, record: ShipmentRecord) -> Result<ComplianceReport, EngineError> {
        let record = record.normalized();

        // The evaluator owns the "missing" reason for a blank code; the
        // lookup result only matters when a code is present.
        let hs_code_found = match record.hs_code.as_deref() {
            Some(code) => self.hs_index.exists(code).await?,
            None => false,
        };

        let outcome = evaluate(&record, hs_code_found, &self.reference);
        let mut reasons = outcome.reasons;

        match self.classifier.classify(&record.description) {
            Ok(true) => {}
            Ok(false) => reasons.push(CLASSIFIER_REASON.to_owned()),
            Err(ClassifierError::Vectorization(detail)) => {
                debug!(%detail, "classifier vectorization failure, recorded as reason");
                reasons.push(VECTORIZATION_REASON.to_owned());
            }
            Err(err) => return Err(err.into()),
        }

        let mut report = ComplianceReport::compose(
            &record,
            outcome.category,
            reasons,
            outcome.documents,
            outcome.approvals,
            outcome.certifications,
            Utc::now(),
        );

        if let Some(store) = &self.reports {
            let id = store.insert(&report).await?;
            report = report.with_id(id);
        }

        debug!(status = ?report.status, "compliance check complete");
        Ok(report)
    }

    /// Evaluate a sequence of records independently.
    ///
    /// Returns exactly one entry per input record, in input order, even
    /// though evaluation runs concurrently (up to the configured batch
    /// concurrency). A failing record yields an `Err` entry and never
    /// affects its neighbours.
    #[instrument(skip_all, fields(records = records.len()))]
    pub async fn check_all(
        &self,
        records: Vec<ShipmentRecord>,
    ) -> Vec<Result<ComplianceReport, EngineError>> {
        stream::iter(records)
            .map(|record| self.check(record))
            .buffered(self.batch_concurrency)
            .collect()
            .await
    }

    /// Evaluate pre-adapted rows from a tabular upload.
    ///
    /// Rows the input adapter already rejected pass through as `Err` entries
    /// at their original positions; everything else is evaluated as in
    /// [`check_all`](Self::check_all).
    pub async fn check_rows(
        &self,
        rows: Vec<Result<ShipmentRecord, IngestError>>,
    ) -> Vec<Result<ComplianceReport, EngineError>> {
        stream::iter(rows)
            .map(|row| async {
                match row {
                    Ok(record) => self.check(record).await,
                    Err(err) => Err(err.into()),
                }
            })
            .buffered(self.batch_concurrency)
            .collect()
            .await
    }
}
