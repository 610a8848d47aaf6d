//! Greedy weekly placement engine
//!
//! Sessions are taken in priority order and each one lands on the earliest
//! viable day that passes every spacing check against what is already placed.
//! Placements are final: nothing is moved to make room for a later session.
//!
//! Two checks gate a candidate day:
//! - Lead-in window: the `before` days right ahead of it are inside the week
//!   and hold no quality session.
//! - Neighbor spacing: the empty gap to the nearest placed session on each
//!   side meets the stricter of the two sessions' requirements.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use tracing::{debug, info, warn};

use crate::catalog::RuleCatalog;
use crate::eligibility::{candidate_days, compute_blocked_days, normalize_long_run, validate_distance};
use crate::errors::PlanError;
use crate::models::{PlanInput, PlanResult, QualityRule, Weekday};
use crate::ordering::{order_sessions, QueuedSession};

/// Days already holding a quality session, with the rule that placed it
type Occupancy<'a> = BTreeMap<Weekday, &'a QualityRule>;

/// ---------------------------------------------------------------------------
/// Placement Checks
/// ---------------------------------------------------------------------------

/// The `before` days ahead of `day` must exist this week and be free of quality
fn lead_in_clear(day: Weekday, before: u8, occupancy: &Occupancy) -> bool {
  (1..=before).all(|offset| match day.checked_back(offset) {
    Some(prev) => !occupancy.contains_key(&prev),
    None => false, // falls off Monday
  })
}

fn nearest_left<'a>(day: Weekday, occupancy: &Occupancy<'a>) -> Option<(Weekday, &'a QualityRule)> {
  occupancy.range(..day).next_back().map(|(d, rule)| (*d, *rule))
}

fn nearest_right<'a>(day: Weekday, occupancy: &Occupancy<'a>) -> Option<(Weekday, &'a QualityRule)> {
  occupancy
    .range((Excluded(day), Unbounded))
    .next()
    .map(|(d, rule)| (*d, *rule))
}

/// Gap to the nearest placed session on each side honors both sessions' buffers
fn spacing_clear(day: Weekday, rule: &QualityRule, occupancy: &Occupancy) -> bool {
  if let Some((left, left_rule)) = nearest_left(day, occupancy) {
    if left.gap_to(day) < left_rule.after.max(rule.before) {
      return false;
    }
  }

  if let Some((right, right_rule)) = nearest_right(day, occupancy) {
    if day.gap_to(right) < rule.after.max(right_rule.before) {
      return false;
    }
  }

  true
}

/// First viable day that can take the session, if any
fn find_slot(candidates: &[Weekday], rule: &QualityRule, occupancy: &Occupancy) -> Option<Weekday> {
  candidates.iter().copied().find(|&day| {
    !day.is_long_run_day()
      && !occupancy.contains_key(&day)
      && lead_in_clear(day, rule.before, occupancy)
      && spacing_clear(day, rule, occupancy)
  })
}

pub fn unplaced_warning(key: &str) -> String {
  format!(
    "Could not fit \"{}\" given the spacing rules and long-run buffers.",
    key
  )
}

/// ---------------------------------------------------------------------------
/// Planner
/// ---------------------------------------------------------------------------

/// Plan one week of quality sessions around the Sunday long run.
///
/// Fails only when the input is unusable: a long run type the catalog does not
/// cover, or a distance that is negative or not a number. Sessions that do not
/// fit come back as warnings.
pub fn plan_week(input: &PlanInput, catalog: &RuleCatalog) -> Result<PlanResult, PlanError> {
  let distance_mi = validate_distance(input.long_distance_mi)?;

  let effective_long_type = normalize_long_run(input.long_run_type, distance_mi);
  if effective_long_type != input.long_run_type {
    debug!(
      requested = %input.long_run_type,
      effective = %effective_long_type,
      distance_mi,
      "Long run upgraded by distance"
    );
  }
  let long_rule = catalog.long_run(effective_long_type)?;

  let blocked = compute_blocked_days(long_rule);
  let viable_days = candidate_days(&blocked);

  let queue = order_sessions(&input.quality_selections, catalog);

  let mut occupancy: Occupancy = BTreeMap::new();
  let mut schedule = BTreeMap::new();
  let mut warnings = Vec::new();

  for QueuedSession { key, rule, .. } in queue {
    match find_slot(&viable_days, rule, &occupancy) {
      Some(day) => {
        debug!(session = key, day = %day, "Placed quality session");
        occupancy.insert(day, rule);
        schedule.insert(day, key.to_string());
      }
      None => {
        warn!(session = key, "No day satisfies spacing for quality session");
        warnings.push(unplaced_warning(key));
      }
    }
  }

  info!(
    long_run = %effective_long_type,
    viable = viable_days.len(),
    placed = schedule.len(),
    unplaced = warnings.len(),
    "Planned week"
  );

  Ok(PlanResult {
    viable_days,
    schedule,
    warnings,
    effective_long_type,
  })
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::{
    FARTLEK_HILLS, LONG_PROGRESSION, MEDIUM_LONG_EASY, MP_ALTERNATIONS, MP_BIG, THRESHOLD,
    VO2_BIG, VO2_MICRO,
  };
  use crate::models::LongRunKind;
  use crate::test_utils::{catalog_with_sessions, plan_input, quality_rule};
  use Weekday::*;

  #[test]
  fn test_long_easy_two_qualities() {
    let input = plan_input(LongRunKind::Easy, 16.0, &[THRESHOLD, VO2_MICRO]);
    let result = plan_week(&input, &RuleCatalog::builtin()).unwrap();

    assert_eq!(result.viable_days, vec![Tue, Wed, Thu, Fri]);
    assert_eq!(result.session_on(Tue), Some(THRESHOLD));
    assert_eq!(result.session_on(Thu), Some(VO2_MICRO));
    assert!(result.warnings.is_empty());
    assert_eq!(result.effective_long_type, LongRunKind::Easy);
  }

  #[test]
  fn test_mp_long_only_thursday() {
    let input = plan_input(LongRunKind::Mp, 20.0, &[MP_ALTERNATIONS, VO2_MICRO]);
    let result = plan_week(&input, &RuleCatalog::builtin()).unwrap();

    assert_eq!(result.viable_days, vec![Thu]);
    assert_eq!(result.session_on(Thu), Some(MP_ALTERNATIONS));
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains(VO2_MICRO));
  }

  #[test]
  fn test_auto_upgrade_to_big_easy() {
    let input = plan_input(LongRunKind::Easy, 22.0, &[FARTLEK_HILLS, VO2_MICRO]);
    let result = plan_week(&input, &RuleCatalog::builtin()).unwrap();

    assert_eq!(result.effective_long_type, LongRunKind::Big);
    assert_eq!(result.viable_days, vec![Wed, Thu]);
    assert_eq!(result.session_on(Wed), Some(FARTLEK_HILLS));
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains(VO2_MICRO));
  }

  #[test]
  fn test_lead_in_falls_off_monday() {
    // VO2 big needs two easy days ahead; Tue would reach back past Monday
    let input = plan_input(LongRunKind::Easy, 16.0, &[VO2_BIG]);
    let result = plan_week(&input, &RuleCatalog::builtin()).unwrap();

    assert_eq!(result.session_on(Tue), None);
    assert_eq!(result.session_on(Wed), Some(VO2_BIG));
    assert!(result.warnings.is_empty());
  }

  #[test]
  fn test_lead_in_may_use_blocked_days() {
    let input = plan_input(LongRunKind::Progressive, 18.0, &[THRESHOLD]);
    let result = plan_week(&input, &RuleCatalog::builtin()).unwrap();

    assert_eq!(result.session_on(Wed), Some(THRESHOLD));
  }

  #[test]
  fn test_lead_in_blocked_by_placed_session() {
    let catalog = catalog_with_sessions(vec![
      quality_rule("Anchor", 0, 0, 9),
      quality_rule("Needs two", 2, 0, 1),
    ]);
    let input = plan_input(LongRunKind::Easy, 16.0, &["Anchor", "Needs two"]);
    let result = plan_week(&input, &catalog).unwrap();

    // Anchor takes Tue. Wed and Thu have Tue inside their two-day lead-in.
    assert_eq!(result.session_on(Tue), Some("Anchor"));
    assert_eq!(result.session_on(Fri), Some("Needs two"));
    assert!(result.warnings.is_empty());
  }

  #[test]
  fn test_neighbor_spacing_rejects_all_days() {
    let input = plan_input(LongRunKind::Easy, 16.0, &[MP_BIG, MEDIUM_LONG_EASY]);
    let result = plan_week(&input, &RuleCatalog::builtin()).unwrap();

    assert_eq!(result.session_on(Wed), Some(MP_BIG));
    assert_eq!(result.placed_count(), 1);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains(MEDIUM_LONG_EASY));
  }

  #[test]
  fn test_neighbor_spacing_satisfied() {
    let input = plan_input(LongRunKind::Easy, 16.0, &[THRESHOLD, FARTLEK_HILLS]);
    let result = plan_week(&input, &RuleCatalog::builtin()).unwrap();

    assert_eq!(result.session_on(Tue), Some(THRESHOLD));
    assert_eq!(result.session_on(Thu), Some(FARTLEK_HILLS));
    assert!(result.warnings.is_empty());
  }

  #[test]
  fn test_spacing_checks_right_neighbor() {
    let catalog = catalog_with_sessions(vec![
      quality_rule("Heavy", 3, 0, 5),
      quality_rule("Light", 0, 1, 1),
    ]);
    let input = plan_input(LongRunKind::Easy, 16.0, &["Light", "Heavy"]);
    let result = plan_week(&input, &catalog).unwrap();

    // Heavy needs three lead-in days, so Thu is its first fit. Tue would leave
    // only one empty day ahead of it and Wed none, pushing Light to Fri.
    assert_eq!(result.session_on(Thu), Some("Heavy"));
    assert_eq!(result.session_on(Tue), None);
    assert_eq!(result.session_on(Fri), Some("Light"));
    assert!(result.warnings.is_empty());
  }

  #[test]
  fn test_spacing_measured_to_nearest_session() {
    let catalog = catalog_with_sessions(vec![
      quality_rule("First", 0, 3, 9),
      quality_rule("Second", 0, 0, 1),
    ]);
    let input = plan_input(LongRunKind::Easy, 16.0, &["First", "Second"]);
    let result = plan_week(&input, &catalog).unwrap();

    // First on Tue demands three empty days after it; Wed, Thu, Fri are all too close
    assert_eq!(result.session_on(Tue), Some("First"));
    assert_eq!(result.placed_count(), 1);
    assert_eq!(result.warnings, vec![unplaced_warning("Second")]);
  }

  #[test]
  fn test_equal_weight_priority_order() {
    let input = plan_input(LongRunKind::Easy, 16.0, &[FARTLEK_HILLS, THRESHOLD, VO2_MICRO]);
    let result = plan_week(&input, &RuleCatalog::builtin()).unwrap();

    assert_eq!(result.session_on(Tue), Some(FARTLEK_HILLS));
    assert_eq!(result.session_on(Thu), Some(THRESHOLD));
    assert_eq!(result.warnings, vec![unplaced_warning(VO2_MICRO)]);
  }

  #[test]
  fn test_unplaceable_session_does_not_stop_queue() {
    let catalog = catalog_with_sessions(vec![
      quality_rule("Too long a taper", 6, 0, 9),
      quality_rule("Easy fit", 0, 0, 1),
    ]);
    let input = plan_input(LongRunKind::Easy, 16.0, &["Too long a taper", "Easy fit"]);
    let result = plan_week(&input, &catalog).unwrap();

    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("Too long a taper"));
    assert_eq!(result.session_on(Tue), Some("Easy fit"));
  }

  #[test]
  fn test_unknown_keys_ignored() {
    let input = plan_input(LongRunKind::Easy, 16.0, &["Unknown Quality", THRESHOLD]);
    let result = plan_week(&input, &RuleCatalog::builtin()).unwrap();

    assert_eq!(result.session_on(Tue), Some(THRESHOLD));
    assert_eq!(result.placed_count(), 1);
    assert!(result.warnings.is_empty());
  }

  #[test]
  fn test_empty_selections() {
    let input = plan_input(LongRunKind::Easy, 16.0, &[]);
    let result = plan_week(&input, &RuleCatalog::builtin()).unwrap();

    assert!(result.schedule.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.viable_days, vec![Tue, Wed, Thu, Fri]);
  }

  #[test]
  fn test_full_catalog_load() {
    let catalog = RuleCatalog::builtin();
    let all: Vec<&str> = catalog.session_keys().collect();
    let input = plan_input(LongRunKind::Easy, 16.0, &all);
    let result = plan_week(&input, &catalog).unwrap();

    assert!(result.placed_count() > 0);
    assert!(!result.warnings.is_empty());
    assert_eq!(result.placed_count() + result.warnings.len(), all.len());
  }

  #[test]
  fn test_never_schedules_sunday() {
    let catalog = catalog_with_sessions(vec![quality_rule("Any", 0, 0, 1)]);
    let open_week = RuleCatalog {
      long_runs: [(
        LongRunKind::Easy,
        crate::models::LongRunRule {
          kind: LongRunKind::Easy,
          label: "No buffers".to_string(),
          before: 0,
          after: 0,
        },
      )]
      .into_iter()
      .collect(),
      ..catalog
    };
    let input = plan_input(LongRunKind::Easy, 16.0, &["Any"; 7]);
    let result = plan_week(&input, &open_week).unwrap();

    assert_eq!(result.viable_days, Weekday::TRAINING_DAYS.to_vec());
    assert_eq!(result.placed_count(), 6);
    assert!(result.session_on(Sun).is_none());
    assert_eq!(result.warnings.len(), 1);
  }

  #[test]
  fn test_deterministic() {
    let input = plan_input(
      LongRunKind::Progressive,
      18.0,
      &[FARTLEK_HILLS, LONG_PROGRESSION, THRESHOLD],
    );
    let catalog = RuleCatalog::builtin();
    let first = plan_week(&input, &catalog).unwrap();
    let second = plan_week(&input, &catalog).unwrap();

    assert_eq!(first, second);
    assert_eq!(
      serde_json::to_string(&first).unwrap(),
      serde_json::to_string(&second).unwrap()
    );
  }

  #[test]
  fn test_missing_long_run_rule_is_error() {
    let catalog = RuleCatalog {
      long_runs: BTreeMap::new(),
      sessions: RuleCatalog::builtin().sessions,
    };
    let input = plan_input(LongRunKind::Hilly, 16.0, &[THRESHOLD]);
    let err = plan_week(&input, &catalog).unwrap_err();
    assert!(matches!(err, PlanError::MissingLongRunRule(LongRunKind::Hilly)));
  }

  #[test]
  fn test_upgrade_resolves_big_rule() {
    // Only `big` is configured, so an upgraded easy run still resolves
    let builtin = RuleCatalog::builtin();
    let catalog = RuleCatalog {
      long_runs: builtin
        .long_runs
        .into_iter()
        .filter(|(kind, _)| *kind == LongRunKind::Big)
        .collect(),
      sessions: builtin.sessions,
    };
    assert!(plan_week(&plan_input(LongRunKind::Easy, 21.0, &[]), &catalog).is_ok());
    assert!(plan_week(&plan_input(LongRunKind::Easy, 20.0, &[]), &catalog).is_err());
  }

  #[test]
  fn test_invalid_distance() {
    let catalog = RuleCatalog::builtin();
    for distance in [-1.0, f64::NAN, f64::INFINITY] {
      let err = plan_week(&plan_input(LongRunKind::Easy, distance, &[]), &catalog).unwrap_err();
      assert!(matches!(err, PlanError::InvalidDistance(_)));
    }
  }

  #[test]
  fn test_lead_in_clear_helper() {
    let rule = quality_rule("X", 0, 0, 1);
    let mut occupancy: Occupancy = BTreeMap::new();
    assert!(lead_in_clear(Mon, 0, &occupancy));
    assert!(!lead_in_clear(Mon, 1, &occupancy));
    assert!(lead_in_clear(Wed, 2, &occupancy));

    occupancy.insert(Mon, &rule);
    assert!(!lead_in_clear(Wed, 2, &occupancy));
    assert!(lead_in_clear(Wed, 1, &occupancy));
  }
}
