pub mod categorize;
pub mod escalation;
pub mod evaluate;

pub use categorize::infer_category;
pub use escalation::apply_value_escalation;
pub use evaluate::{evaluate, RuleOutcome};
