pub mod plan;
pub mod rules;
pub mod weekday;

pub use plan::{PlanInput, PlanResult};
pub use rules::{LongRunKind, LongRunRule, QualityRule};
pub use weekday::Weekday;
