use crate::banned::{BannedCountries, BannedProducts};
use crate::limits::BaselineLimits;
use crate::requirements::CategoryTable;

/// The complete set of immutable-at-runtime reference tables the rule
/// evaluator consults.
///
/// Assembled once during start-up and shared (behind an `Arc`) across all
/// concurrent evaluations; nothing here mutates after construction.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub limits: BaselineLimits,
    pub banned_products: BannedProducts,
    pub banned_countries: BannedCountries,
    pub categories: CategoryTable,
}

impl ReferenceData {
    /// Assemble the built-in static tables around externally loaded limits.
    pub fn builtin(limits: BaselineLimits) -> Self {
        Self {
            limits,
            banned_products: BannedProducts::builtin(),
            banned_countries: BannedCountries::builtin(),
            categories: CategoryTable::builtin(),
        }
    }
}
