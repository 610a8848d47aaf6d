//! Test utilities and fixtures shared by unit tests
//!
//! - Plan input builders
//! - Substitute catalogs with hand-picked session rules

use crate::catalog::RuleCatalog;
use crate::models::{LongRunKind, PlanInput, QualityRule};

/// ---------------------------------------------------------------------------
/// Input Builders
/// ---------------------------------------------------------------------------

pub fn selections(keys: &[&str]) -> Vec<String> {
  keys.iter().map(|k| k.to_string()).collect()
}

pub fn plan_input(long_run_type: LongRunKind, long_distance_mi: f64, keys: &[&str]) -> PlanInput {
  PlanInput {
    long_run_type,
    long_distance_mi,
    quality_selections: selections(keys),
  }
}

/// ---------------------------------------------------------------------------
/// Catalog Fixtures
/// ---------------------------------------------------------------------------

pub fn quality_rule(key: &str, before: u8, after: u8, weight: u32) -> QualityRule {
  QualityRule {
    key: key.to_string(),
    before,
    after,
    weight,
    description: None,
  }
}

/// Built-in long run rules with only the given sessions
pub fn catalog_with_sessions(sessions: Vec<QualityRule>) -> RuleCatalog {
  RuleCatalog {
    long_runs: RuleCatalog::builtin().long_runs,
    sessions,
  }
}
