//! End-to-end engine tests: ingest -> rules -> classifier -> composition ->
//! persistence, including failure isolation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use cleargate_classifier::testing::FixedClassifier;
use cleargate_classifier::LinearClassifier;
use cleargate_core::{ComplianceReport, ComplianceStatus, ReportStore, ShipmentRecord, StoreError};
use cleargate_engine::{read_csv, EngineBuilder, EngineError};
use cleargate_reference::{BaselineLimits, ReferenceData};
use cleargate_store_memory::{MemoryHsCodeIndex, MemoryReportStore};

fn limits() -> BaselineLimits {
    BaselineLimits {
        min_weight: 0.1,
        max_weight: 100.0,
        min_length: 1.0,
        max_length: 300.0,
        min_breadth: 1.0,
        max_breadth: 300.0,
        min_height: 1.0,
        max_height: 300.0,
    }
}

fn clean_record() -> ShipmentRecord {
    ShipmentRecord::new("Cotton Shirts", "plain cotton shirts")
        .with_hs_code("610910")
        .with_courier("FedEx")
        .with_dimensions(5.0, 60.0, 40.0, 30.0)
        .with_origin("Vietnam")
        .with_declared_value(50_000.0)
}

#[tokio::test]
async fn persisted_report_carries_the_store_id() {
    let store = Arc::new(MemoryReportStore::new());
    let engine = EngineBuilder::new()
        .reference(ReferenceData::builtin(limits()))
        .classifier(Arc::new(FixedClassifier::compliant()))
        .hs_index(Arc::new(MemoryHsCodeIndex::new(["610910"])))
        .report_store(store.clone())
        .build()
        .unwrap();

    let report = engine.check(clean_record()).await.unwrap();
    let id = report.id.clone().expect("persisted report has an id");

    let stored = store.get(&id).await.unwrap().expect("report was stored");
    assert_eq!(stored.item_name, "Cotton Shirts");
    assert_eq!(stored.status, ComplianceStatus::Compliant);
}

#[tokio::test]
async fn csv_upload_flows_through_the_batch_driver() {
    let store = Arc::new(MemoryReportStore::new());
    let engine = EngineBuilder::new()
        .reference(ReferenceData::builtin(limits()))
        .classifier(Arc::new(FixedClassifier::compliant()))
        .hs_index(Arc::new(MemoryHsCodeIndex::new(["610910", "847130"])))
        .report_store(store.clone())
        // Sequential so the store's insertion order is the row order.
        .batch_concurrency(1)
        .build()
        .unwrap();

    let data = "\
hscode,item_name,courier,input_text,weight,length,breadth,height,OriginCountry,declared_value
610910,Shirts,FedEx,plain cotton shirts,5,60,40,30,Vietnam,50000
847130,Laptops,DHL,laptops marked as electronics,4,40,30,8,Germany,250000
610910,Anvils,UPS,iron anvils,not-a-number,60,40,30,Brazil,50000
610910,Statues,DHL,I am shipping IVORY statues,5,60,40,30,Kenya,50000
";
    let rows = read_csv(data.as_bytes());
    assert_eq!(rows.len(), 4);

    let results = engine.check_rows(rows).await;
    assert_eq!(results.len(), 4);

    // Row 0: fully clean.
    let shirts = results[0].as_ref().unwrap();
    assert_eq!(shirts.status, ComplianceStatus::Compliant);

    // Row 1: clean fields, but the Electronics baseline adds obligations
    // (plus a value-escalation tier), so the report is flagged.
    let laptops = results[1].as_ref().unwrap();
    assert_eq!(laptops.status, ComplianceStatus::Flagged);
    assert!(laptops
        .required_documents
        .contains(&"Self-declaration".to_owned()));

    // Row 2: non-coercible weight, isolated to this row.
    assert!(matches!(results[2], Err(EngineError::Ingest(_))));

    // Row 3: banned product in the description.
    let statues = results[3].as_ref().unwrap();
    assert!(statues
        .reasons
        .contains(&"Ivory is prohibited.".to_owned()));

    // Only successful evaluations were persisted, in input order.
    let names: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.item_name)
        .collect();
    assert_eq!(names, vec!["Shirts", "Laptops", "Statues"]);
}

#[tokio::test]
async fn real_linear_classifier_feeds_the_verdict() {
    let vocabulary = HashMap::from([("certified".to_owned(), 0), ("smuggled".to_owned(), 1)]);
    let classifier = LinearClassifier::from_parts(vocabulary, vec![1.0, 1.0], vec![3.0, -3.0], 0.0);

    let engine = EngineBuilder::new()
        .reference(ReferenceData::builtin(limits()))
        .classifier(Arc::new(classifier))
        .hs_index(Arc::new(MemoryHsCodeIndex::new(["610910"])))
        .build()
        .unwrap();

    let mut record = clean_record();
    record.description = "smuggled goods".into();
    let report = engine.check(record).await.unwrap();
    assert_eq!(report.status, ComplianceStatus::Flagged);
    assert_eq!(
        report.reasons,
        vec!["Product description does not meet compliance standards."]
    );
}

/// A store whose backend is down. Exercises the "processing error is not a
/// compliance verdict" distinction.
struct FailingStore;

#[async_trait]
impl ReportStore for FailingStore {
    async fn insert(&self, _report: &ComplianceReport) -> Result<String, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn get(&self, _id: &str) -> Result<Option<ComplianceReport>, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn list(&self) -> Result<Vec<ComplianceReport>, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }
}

#[tokio::test]
async fn store_failure_is_an_error_not_a_flag() {
    let engine = EngineBuilder::new()
        .reference(ReferenceData::builtin(limits()))
        .classifier(Arc::new(FixedClassifier::compliant()))
        .hs_index(Arc::new(MemoryHsCodeIndex::new(["610910"])))
        .report_store(Arc::new(FailingStore))
        .build()
        .unwrap();

    let err = engine.check(clean_record()).await.unwrap_err();
    assert!(matches!(err, EngineError::Store(_)));
}

#[tokio::test]
async fn batch_of_n_yields_n_in_order_under_concurrency() {
    let engine = EngineBuilder::new()
        .reference(ReferenceData::builtin(limits()))
        .classifier(Arc::new(FixedClassifier::compliant()))
        .hs_index(Arc::new(MemoryHsCodeIndex::new(["610910"])))
        .batch_concurrency(4)
        .build()
        .unwrap();

    let records: Vec<ShipmentRecord> = (0..50)
        .map(|i| {
            let mut rec = clean_record();
            rec.item_name = format!("item-{i}");
            // Alternate clean and flagged records.
            if i % 2 == 1 {
                rec.origin_country = "Iran".into();
            }
            rec
        })
        .collect();

    let results = engine.check_all(records).await;
    assert_eq!(results.len(), 50);
    for (i, result) in results.iter().enumerate() {
        let report = result.as_ref().unwrap();
        assert_eq!(report.item_name, format!("item-{i}"));
        let expected = if i % 2 == 1 {
            ComplianceStatus::Flagged
        } else {
            ComplianceStatus::Compliant
        };
        assert_eq!(report.status, expected, "record {i}");
    }
}
