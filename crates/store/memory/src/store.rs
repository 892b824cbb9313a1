use std::sync::Mutex;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use cleargate_core::{ComplianceReport, ReportStore, StoreError};

/// In-memory report store using `DashMap`. Suitable for development and
/// testing.
///
/// Reports are keyed by their assigned id; a secondary insertion-order index
/// lets `list` return reports in the order they were persisted.
pub struct MemoryReportStore {
    reports: DashMap<String, ComplianceReport>,
    insertion_order: Mutex<Vec<String>>,
}

impl MemoryReportStore {
    /// Create a new empty in-memory report store.
    pub fn new() -> Self {
        Self {
            reports: DashMap::new(),
            insertion_order: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryReportStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn insert(&self, report: &ComplianceReport) -> Result<String, StoreError> {
        let id = Uuid::now_v7().to_string();
        let mut stored = report.clone();
        stored.id = Some(id.clone());
        self.reports.insert(id.clone(), stored);
        self.insertion_order
            .lock()
            .map_err(|_| StoreError::Backend("insertion index poisoned".into()))?
            .push(id.clone());
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<ComplianceReport>, StoreError> {
        Ok(self.reports.get(id).map(|r| r.value().clone()))
    }

    async fn list(&self) -> Result<Vec<ComplianceReport>, StoreError> {
        let order = self
            .insertion_order
            .lock()
            .map_err(|_| StoreError::Backend("insertion index poisoned".into()))?
            .clone();
        Ok(order
            .iter()
            .filter_map(|id| self.reports.get(id).map(|r| r.value().clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use cleargate_core::{Category, ShipmentRecord};

    use super::*;

    fn report(item: &str) -> ComplianceReport {
        ComplianceReport::compose(
            &ShipmentRecord::new(item, "plain goods"),
            Category::Other,
            vec![],
            vec![],
            vec![],
            vec![],
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn insert_assigns_an_id() {
        let store = MemoryReportStore::new();
        let id = store.insert(&report("Shirts")).await.unwrap();
        let fetched = store.get(&id).await.unwrap().unwrap();
        assert_eq!(fetched.id.as_deref(), Some(id.as_str()));
        assert_eq!(fetched.item_name, "Shirts");
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let store = MemoryReportStore::new();
        assert!(store.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryReportStore::new();
        for item in ["a", "b", "c"] {
            store.insert(&report(item)).await.unwrap();
        }
        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.item_name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
