//! Display helpers for a planned week
//!
//! Nothing here schedules anything; these read a `PlanResult` and the
//! catalog and shape them for people.

use serde::{Deserialize, Serialize};

use crate::catalog::RuleCatalog;
use crate::models::{PlanResult, Weekday};

pub fn day_name(day: Weekday) -> &'static str {
  day.short_name()
}

/// "Tue, Wed, Thu", or "no days" when nothing is viable
pub fn format_viable_days(days: &[Weekday]) -> String {
  if days.is_empty() {
    return "no days".to_string();
  }
  days.iter().map(|d| day_name(*d)).collect::<Vec<_>>().join(", ")
}

/// Training days the long run closed to quality
pub fn blocked_training_days(viable_days: &[Weekday]) -> Vec<Weekday> {
  Weekday::TRAINING_DAYS
    .into_iter()
    .filter(|d| !viable_days.contains(d))
    .collect()
}

/// ---------------------------------------------------------------------------
/// Day Status
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
  Quality,
  Blocked,
  Easy,
  Long,
}

pub fn day_status(day: Weekday, result: &PlanResult) -> DayStatus {
  if day.is_long_run_day() {
    DayStatus::Long
  } else if result.schedule.contains_key(&day) {
    DayStatus::Quality
  } else if !result.is_viable(day) {
    DayStatus::Blocked
  } else {
    DayStatus::Easy
  }
}

/// ---------------------------------------------------------------------------
/// Effort Level
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortLevel {
  Easy,
  Medium,
  MediumHigh,
  High,
}

impl EffortLevel {
  pub fn from_weight(weight: u32) -> Self {
    match weight {
      w if w >= 4 => EffortLevel::High,
      3 => EffortLevel::MediumHigh,
      2 => EffortLevel::Medium,
      _ => EffortLevel::Easy,
    }
  }
}

/// A catalog session shaped for a picker list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDisplay {
  pub key: String,
  pub before: u8,
  pub after: u8,
  pub weight: u32,
  pub effort: EffortLevel,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

pub fn session_display(key: &str, catalog: &RuleCatalog) -> Option<SessionDisplay> {
  let rule = catalog.session(key)?;
  Some(SessionDisplay {
    key: rule.key.clone(),
    before: rule.before,
    after: rule.after,
    weight: rule.weight,
    effort: EffortLevel::from_weight(rule.weight),
    description: rule.description.clone(),
  })
}

pub fn all_sessions(catalog: &RuleCatalog) -> Vec<SessionDisplay> {
  catalog
    .session_keys()
    .filter_map(|key| session_display(key, catalog))
    .collect()
}
