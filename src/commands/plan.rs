//! Commands for planning a week

use serde::Serialize;
use std::path::Path;

use crate::catalog::RuleCatalog;
use crate::eligibility::{candidate_days, compute_blocked_days, normalize_long_run, validate_distance};
use crate::errors::PlanError;
use crate::load::{weekly_load, WeeklyLoad};
use crate::models::{LongRunKind, PlanInput, PlanResult, Weekday};
use crate::planner::plan_week;
use crate::presentation::{blocked_training_days, day_name, day_status, format_viable_days, DayStatus};

/// One row of the week as the front end shows it
#[derive(Debug, Clone, Serialize)]
pub struct DayView {
  pub day: Weekday,
  pub name: &'static str,
  pub status: DayStatus,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub session: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
  #[serde(flatten)]
  pub result: PlanResult,
  pub load: WeeklyLoad,
  pub week: Vec<DayView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViableResponse {
  pub effective_long_type: LongRunKind,
  pub viable_days: Vec<Weekday>,
  pub blocked_days: Vec<Weekday>,
  pub summary: String,
}

/// Read a plan request from a JSON file
pub fn read_plan_input(path: &Path) -> Result<PlanInput, PlanError> {
  let json = std::fs::read_to_string(path)
    .map_err(|e| PlanError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
  serde_json::from_str(&json)
    .map_err(|e| PlanError::Config(format!("Invalid plan request {}: {}", path.display(), e)))
}

/// Plan a week and attach the load score and per-day view
pub fn plan(input: &PlanInput, catalog: &RuleCatalog) -> Result<PlanResponse, PlanError> {
  let result = plan_week(input, catalog)?;
  let load = weekly_load(&result, catalog);
  let week = Weekday::ALL
    .into_iter()
    .map(|day| DayView {
      day,
      name: day_name(day),
      status: day_status(day, &result),
      session: result.session_on(day).map(str::to_string),
    })
    .collect();

  Ok(PlanResponse { result, load, week })
}

/// Which days a long run leaves open, without placing anything
pub fn viable(
  long_run_type: LongRunKind,
  distance_mi: f64,
  catalog: &RuleCatalog,
) -> Result<ViableResponse, PlanError> {
  let distance_mi = validate_distance(distance_mi)?;
  let effective_long_type = normalize_long_run(long_run_type, distance_mi);
  let rule = catalog.long_run(effective_long_type)?;
  let viable_days = candidate_days(&compute_blocked_days(rule));

  Ok(ViableResponse {
    effective_long_type,
    blocked_days: blocked_training_days(&viable_days),
    summary: format_viable_days(&viable_days),
    viable_days,
  })
}
