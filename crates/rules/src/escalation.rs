/// Declared value above which a self-declaration is required (1 Lakh INR).
pub const SELF_DECLARATION_THRESHOLD: f64 = 100_000.0;

/// Declared value above which a BRC and Letter of Credit are required
/// (25 Lakh INR).
pub const BRC_THRESHOLD: f64 = 2_500_000.0;

/// Declared value above which customs valuation documents are required
/// (1 Crore INR).
pub const VALUATION_THRESHOLD: f64 = 10_000_000.0;

/// Apply the declared-value documentation escalation tiers.
///
/// Each threshold is strictly greater-than and independently additive: a
/// value above the highest tier triggers all three, appending five document
/// entries and three reasons in tier order.
pub fn apply_value_escalation(
    declared_value: f64,
    documents: &mut Vec<String>,
    reasons: &mut Vec<String>,
) {
    if declared_value > SELF_DECLARATION_THRESHOLD {
        documents.push("Self-declaration".to_owned());
        reasons.push("Declared value exceeds 1 Lakh INR: Self-declaration required.".to_owned());
    }
    if declared_value > BRC_THRESHOLD {
        documents.push("Bank Realization Certificate (BRC)".to_owned());
        documents.push("Letter of Credit (if applicable)".to_owned());
        reasons
            .push("Declared value exceeds 25 Lakh INR: BRC and Letter of Credit required.".to_owned());
    }
    if declared_value > VALUATION_THRESHOLD {
        documents.push("Customs Valuation Certificate".to_owned());
        documents.push("CA Certificate".to_owned());
        reasons.push(
            "Declared value exceeds 1 Crore INR: Customs Valuation Certificate and CA Certificate required."
                .to_owned(),
        );
    }
}
