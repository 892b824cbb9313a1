use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::shipment::ShipmentRecord;

/// Final compliance status of an evaluated shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    /// No violations and no missing requirements were found.
    Compliant,
    /// At least one violation or missing requirement was found.
    Flagged,
}

/// The structured outcome of one compliance evaluation.
///
/// A report is immutable once composed: [`ComplianceReport::compose`] is the
/// only constructor and derives `status` from the reason list, so the
/// invariant *Flagged iff reasons is non-empty* holds everywhere a report
/// exists. `reasons` preserves discovery order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Durable identifier assigned by the persistence collaborator. `None`
    /// until the report has been stored; opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    // -- Echoed input fields (normalized) --
    pub hs_code: Option<String>,
    pub item_name: String,
    pub courier: String,
    pub description: String,
    pub weight: f64,
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
    pub origin_country: String,
    pub declared_value: f64,

    // -- Verdict --
    /// Compliant iff `reasons` is empty.
    pub status: ComplianceStatus,
    /// Itemized, human-readable findings in the order they were discovered.
    pub reasons: Vec<String>,

    // -- Obligations --
    /// Inferred product category.
    pub category: Category,
    /// Documents the shipment must carry (category baseline plus any
    /// declared-value escalation additions).
    pub required_documents: Vec<String>,
    /// Approvals the shipment must carry.
    pub required_approvals: Vec<String>,
    /// Certifications the shipment must carry.
    pub required_certifications: Vec<String>,

    /// When the evaluation ran.
    pub checked_at: DateTime<Utc>,
}

impl ComplianceReport {
    /// Compose a report from an evaluated record and its findings.
    ///
    /// `status` is derived here and nowhere else: an empty reason list means
    /// `Compliant`, anything else means `Flagged`.
    #[must_use]
    pub fn compose(
        record: &ShipmentRecord,
        category: Category,
        reasons: Vec<String>,
        required_documents: Vec<String>,
        required_approvals: Vec<String>,
        required_certifications: Vec<String>,
        checked_at: DateTime<Utc>,
    ) -> Self {
        let status = if reasons.is_empty() {
            ComplianceStatus::Compliant
        } else {
            ComplianceStatus::Flagged
        };
        Self {
            id: None,
            hs_code: record.hs_code.clone(),
            item_name: record.item_name.clone(),
            courier: record.courier.clone(),
            description: record.description.clone(),
            weight: record.weight,
            length: record.length,
            breadth: record.breadth,
            height: record.height,
            origin_country: record.origin_country.clone(),
            declared_value: record.declared_value,
            status,
            reasons,
            category,
            required_documents,
            required_approvals,
            required_certifications,
            checked_at,
        }
    }

    /// Attach the durable identifier received from the persistence
    /// collaborator.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether the shipment passed every check.
    pub fn is_compliant(&self) -> bool {
        self.status == ComplianceStatus::Compliant
    }
}
