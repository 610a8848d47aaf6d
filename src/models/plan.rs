use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{LongRunKind, Weekday};

/// A request to plan one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
  pub long_run_type: LongRunKind,
  /// Long run distance in miles
  pub long_distance_mi: f64,
  /// Quality session keys in the order the athlete picked them
  #[serde(default)]
  pub quality_selections: Vec<String>,
}

/// The planned week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
  /// Days open to quality sessions, ascending
  pub viable_days: Vec<Weekday>,
  /// Quality session key per day, Monday through Saturday only
  pub schedule: BTreeMap<Weekday, String>,
  /// One entry per session that could not be placed
  pub warnings: Vec<String>,
  /// Long run type after the distance-based upgrade
  pub effective_long_type: LongRunKind,
}

impl PlanResult {
  pub fn session_on(&self, day: Weekday) -> Option<&str> {
    self.schedule.get(&day).map(String::as_str)
  }

  pub fn is_viable(&self, day: Weekday) -> bool {
    self.viable_days.contains(&day)
  }

  pub fn placed_count(&self) -> usize {
    self.schedule.len()
  }
}
