//! Which days can host a quality session
//!
//! The Sunday long run claims recovery days at the start of the week and
//! taper days at the end. Whatever is left between them is viable.

use std::collections::BTreeSet;

use crate::errors::PlanError;
use crate::models::{LongRunKind, LongRunRule, Weekday};

/// Easy long runs at or above this distance (miles) are treated as big easy
pub const BIG_EASY_THRESHOLD_MI: f64 = 21.0;

/// Long run distance must be a finite, non-negative number of miles
pub fn validate_distance(distance_mi: f64) -> Result<f64, PlanError> {
  if distance_mi.is_finite() && distance_mi >= 0.0 {
    Ok(distance_mi)
  } else {
    Err(PlanError::InvalidDistance(distance_mi))
  }
}

/// Upgrade an easy long run to big easy once it reaches the threshold.
/// Every other type passes through unchanged.
pub fn normalize_long_run(kind: LongRunKind, distance_mi: f64) -> LongRunKind {
  if kind == LongRunKind::Easy && distance_mi >= BIG_EASY_THRESHOLD_MI {
    LongRunKind::Big
  } else {
    kind
  }
}

/// Days closed to quality sessions under a long run rule
pub fn compute_blocked_days(rule: &LongRunRule) -> BTreeSet<Weekday> {
  let mut blocked = BTreeSet::new();
  blocked.insert(Weekday::Sun);

  // Recovery after the long run: Mon, Tue, ...
  blocked.extend(Weekday::TRAINING_DAYS.iter().take(rule.after as usize));

  // Taper before the long run: Sat, Fri, ...
  blocked.extend(Weekday::TRAINING_DAYS.iter().rev().take(rule.before as usize));

  blocked
}

/// Monday through Saturday minus the blocked set, ascending
pub fn candidate_days(blocked: &BTreeSet<Weekday>) -> Vec<Weekday> {
  Weekday::TRAINING_DAYS
    .into_iter()
    .filter(|day| !blocked.contains(day))
    .collect()
}
