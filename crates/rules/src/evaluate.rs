use cleargate_core::{Category, ShipmentRecord};
use cleargate_reference::ReferenceData;
use tracing::{debug, instrument};

use crate::categorize::infer_category;
use crate::escalation::apply_value_escalation;

/// Everything the rule evaluator derives from one shipment record: violation
/// reasons in discovery order, the inferred category, and the obligations the
/// shipment must satisfy.
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    /// Violation reasons, ordered by check position. Banned-product matches
    /// are the one exception: their relative order within the scan is
    /// unspecified.
    pub reasons: Vec<String>,
    /// Category inferred from the description.
    pub category: Category,
    /// Required documents (category baseline plus escalation additions).
    pub documents: Vec<String>,
    /// Required approvals (category baseline).
    pub approvals: Vec<String>,
    /// Required certifications (category baseline).
    pub certifications: Vec<String>,
}

/// Evaluate one normalized shipment record against the reference tables.
///
/// Pure and deterministic: no I/O, no side effects, identical input always
/// yields identical reasons in identical order. The checks run in a fixed
/// sequence, so reason order is an observable contract.
///
/// `hs_code_found` carries the caller's HS-code index lookup (performed only
/// when the record has a non-blank code); passing it in keeps the evaluator
/// free of I/O while its "not found" reason still lands at the HS-code check
/// position.
#[instrument(skip_all, fields(item = %record.item_name))]
pub fn evaluate(
    record: &ShipmentRecord,
    hs_code_found: bool,
    reference: &ReferenceData,
) -> RuleOutcome {
    let mut reasons = Vec::new();

    // 1. HS code presence / reference lookup.
    match record.hs_code.as_deref() {
        None | Some("") => reasons.push("HS code is missing.".to_owned()),
        Some(code) if !hs_code_found => {
            reasons.push(format!("HS code {code} not found in records."));
        }
        Some(_) => {}
    }

    // 2-3. Compulsory identity fields.
    if record.item_name.is_empty() {
        reasons.push("Item name is missing.".to_owned());
    }
    if record.courier.is_empty() {
        reasons.push("Courier information is missing.".to_owned());
    }

    // 4. Dimensional limits, fixed order: weight, length, breadth, height.
    let limits = &reference.limits;
    if !limits.weight_in_range(record.weight) {
        reasons.push("Weight is out of allowed range.".to_owned());
    }
    if !limits.length_in_range(record.length) {
        reasons.push("Length is out of allowed range.".to_owned());
    }
    if !limits.breadth_in_range(record.breadth) {
        reasons.push("Breadth is out of allowed range.".to_owned());
    }
    if !limits.height_in_range(record.height) {
        reasons.push("Height is out of allowed range.".to_owned());
    }

    // 5-7. Remaining compulsory fields. A zero declared value counts as
    // missing, not as a free shipment.
    if record.origin_country.is_empty() {
        reasons.push("Origin country is missing.".to_owned());
    }
    if record.declared_value == 0.0 {
        reasons.push("Declared value is missing.".to_owned());
    }
    if record.description.is_empty() {
        reasons.push("Product description is missing.".to_owned());
    }

    // 8. Banned-product scan over the description.
    for item in reference.banned_products.matches_in(&record.description) {
        reasons.push(format!("{item} is prohibited."));
    }

    // 9. Restricted origin.
    if reference.banned_countries.contains(&record.origin_country) {
        reasons.push(format!(
            "Import from {} is restricted.",
            record.origin_country
        ));
    }

    // 10. Category inference and baseline obligations.
    let category = infer_category(&record.description);
    let requirements = reference.categories.requirements_for(category);
    let mut documents = requirements.documents;
    let approvals = requirements.approvals;
    let certifications = requirements.certifications;

    // 11. Declared-value escalation tiers.
    apply_value_escalation(record.declared_value, &mut documents, &mut reasons);

    // 12. Generic obligations reminder.
    if !(documents.is_empty() && approvals.is_empty() && certifications.is_empty()) {
        reasons.push("Product requires additional documents or approvals.".to_owned());
    }

    debug!(
        category = %category,
        reason_count = reasons.len(),
        "rule evaluation complete"
    );

    RuleOutcome {
        reasons,
        category,
        documents,
        approvals,
        certifications,
    }
}

#[cfg(test)]
mod tests {
    use cleargate_reference::BaselineLimits;

    use super::*;

    fn reference() -> ReferenceData {
        ReferenceData::builtin(BaselineLimits {
            min_weight: 0.1,
            max_weight: 100.0,
            min_length: 1.0,
            max_length: 300.0,
            min_breadth: 1.0,
            max_breadth: 300.0,
            min_height: 1.0,
            max_height: 300.0,
        })
    }

    fn clean_record() -> ShipmentRecord {
        ShipmentRecord::new("Cotton Shirts", "plain cotton shirts")
            .with_hs_code("610910")
            .with_courier("FedEx")
            .with_dimensions(5.0, 60.0, 40.0, 30.0)
            .with_origin("Vietnam")
            .with_declared_value(50_000.0)
    }

    #[test]
    fn clean_record_yields_no_reasons() {
        let outcome = evaluate(&clean_record(), true, &reference());
        assert!(outcome.reasons.is_empty(), "{:?}", outcome.reasons);
        assert_eq!(outcome.category, Category::Other);
        assert!(outcome.documents.is_empty());
    }

    #[test]
    fn missing_hs_code_is_first_reason() {
        let mut record = clean_record();
        record.hs_code = None;
        let outcome = evaluate(&record, true, &reference());
        assert_eq!(outcome.reasons[0], "HS code is missing.");
    }

    #[test]
    fn unknown_hs_code_names_the_code() {
        let outcome = evaluate(&clean_record(), false, &reference());
        assert_eq!(outcome.reasons, vec!["HS code 610910 not found in records."]);
    }

    #[test]
    fn missing_item_name_is_independent_of_other_fields() {
        let mut record = clean_record();
        record.item_name = String::new();
        record.origin_country = "North Korea".into();
        record.declared_value = 0.0;
        let outcome = evaluate(&record, true, &reference());
        assert!(outcome
            .reasons
            .contains(&"Item name is missing.".to_owned()));
    }

    #[test]
    fn dimension_reasons_follow_fixed_order() {
        let mut record = clean_record();
        record.weight = 0.0;
        record.length = 0.0;
        record.breadth = 0.0;
        record.height = 0.0;
        let outcome = evaluate(&record, true, &reference());
        assert_eq!(
            outcome.reasons,
            vec![
                "Weight is out of allowed range.",
                "Length is out of allowed range.",
                "Breadth is out of allowed range.",
                "Height is out of allowed range.",
            ]
        );
    }

    #[test]
    fn zero_declared_value_is_missing() {
        let mut record = clean_record();
        record.declared_value = 0.0;
        let outcome = evaluate(&record, true, &reference());
        assert_eq!(outcome.reasons, vec!["Declared value is missing."]);
    }

    #[test]
    fn banned_product_detection_is_case_insensitive() {
        let mut record = clean_record();
        record.description = "I am shipping IVORY statues".into();
        let outcome = evaluate(&record, true, &reference());
        assert!(outcome.reasons.contains(&"Ivory is prohibited.".to_owned()));
    }

    #[test]
    fn banned_origin_always_triggers() {
        let mut record = clean_record();
        record.origin_country = "North Korea".into();
        let outcome = evaluate(&record, true, &reference());
        assert_eq!(outcome.reasons, vec!["Import from North Korea is restricted."]);
    }

    #[test]
    fn category_baseline_triggers_generic_reason() {
        let mut record = clean_record();
        record.description = "consumer electronics".into();
        let outcome = evaluate(&record, true, &reference());
        assert_eq!(outcome.category, Category::Electronics);
        assert_eq!(
            outcome.reasons,
            vec!["Product requires additional documents or approvals."]
        );
        assert_eq!(outcome.documents.len(), 3);
        assert_eq!(outcome.approvals.len(), 2);
        assert_eq!(outcome.certifications.len(), 2);
    }

    #[test]
    fn escalation_appends_to_category_baseline() {
        let mut record = clean_record();
        record.description = "consumer electronics".into();
        record.declared_value = 15_000_000.0;
        let outcome = evaluate(&record, true, &reference());
        // 3 baseline docs + 5 escalation docs, escalation reasons before the
        // generic obligations reminder.
        assert_eq!(outcome.documents.len(), 8);
        assert_eq!(outcome.documents[3], "Self-declaration");
        assert_eq!(
            outcome.reasons.last().unwrap(),
            "Product requires additional documents or approvals."
        );
        assert_eq!(outcome.reasons.len(), 4);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let mut record = clean_record();
        record.description = "old laptops and batteries electronics".into();
        record.origin_country = "China".into();
        let first = evaluate(&record, true, &reference());
        let second = evaluate(&record, true, &reference());
        assert_eq!(first.reasons, second.reasons);
        assert_eq!(first.category, second.category);
        assert_eq!(first.documents, second.documents);
    }

    #[test]
    fn reason_positions_across_check_groups() {
        let mut record = clean_record();
        record.hs_code = None;
        record.courier = String::new();
        record.origin_country = "Pakistan".into();
        record.description = "heroin filled electronics".into();
        let outcome = evaluate(&record, true, &reference());

        let hs_pos = outcome
            .reasons
            .iter()
            .position(|r| r == "HS code is missing.")
            .unwrap();
        let courier_pos = outcome
            .reasons
            .iter()
            .position(|r| r == "Courier information is missing.")
            .unwrap();
        let banned_pos = outcome
            .reasons
            .iter()
            .position(|r| r == "Heroin is prohibited.")
            .unwrap();
        let origin_pos = outcome
            .reasons
            .iter()
            .position(|r| r == "Import from Pakistan is restricted.")
            .unwrap();
        assert!(hs_pos < courier_pos);
        assert!(courier_pos < banned_pos);
        assert!(banned_pos < origin_pos);
    }
}
