pub mod category;
pub mod report;
pub mod shipment;
pub mod store;

pub use category::Category;
pub use report::{ComplianceReport, ComplianceStatus};
pub use shipment::ShipmentRecord;
pub use store::{ReportStore, StoreError};
