//! Weekly training load heuristic
//!
//! Quality sessions contribute ten points per unit of weight. The long run
//! adds a fixed amount by its effective type. Weights come from user-supplied
//! catalogs, so the score saturates at `u32::MAX` instead of overflowing.

use serde::{Deserialize, Serialize};

use crate::catalog::RuleCatalog;
use crate::models::{LongRunKind, PlanResult};

const LOAD_PER_WEIGHT: u32 = 10;

pub fn long_run_load(kind: LongRunKind) -> u32 {
  match kind {
    LongRunKind::Easy => 15,
    LongRunKind::Progressive => 25,
    LongRunKind::Hilly => 25,
    LongRunKind::Big => 30,
    LongRunKind::Mp => 35,
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyLoad {
  pub quality: u32,
  pub long_run: u32,
  pub total: u32,
}

/// Score a planned week. Placed keys missing from the catalog count for nothing.
pub fn weekly_load(result: &PlanResult, catalog: &RuleCatalog) -> WeeklyLoad {
  let quality = result
    .schedule
    .values()
    .filter_map(|key| catalog.session(key))
    .map(|rule| rule.weight.saturating_mul(LOAD_PER_WEIGHT))
    .fold(0u32, u32::saturating_add);
  let long_run = long_run_load(result.effective_long_type);

  WeeklyLoad {
    quality,
    long_run,
    total: quality.saturating_add(long_run),
  }
}
