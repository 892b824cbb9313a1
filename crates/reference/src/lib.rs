pub mod banned;
pub mod data;
pub mod error;
pub mod hscode;
pub mod limits;
pub mod requirements;

pub use banned::{BannedCountries, BannedProducts};
pub use data::ReferenceData;
pub use error::ReferenceError;
pub use hscode::HsCodeIndex;
pub use limits::BaselineLimits;
pub use requirements::{CategoryTable, RequirementSet};
