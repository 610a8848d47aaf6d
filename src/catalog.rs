//! Rule catalogs for long runs and quality sessions
//!
//! A `RuleCatalog` is an immutable value handed to the planner. The built-in
//! table covers the standard marathon-block sessions; alternate tables can be
//! loaded from JSON for testing or coaching variations. Sessions keep the
//! order they are listed in.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::errors::PlanError;
use crate::models::{LongRunKind, LongRunRule, QualityRule};

/// ---------------------------------------------------------------------------
/// Built-in Session Keys
/// ---------------------------------------------------------------------------

pub const MEDIUM_LONG_EASY: &str = "Medium-long easy (90–105′)";
pub const THRESHOLD: &str = "Threshold (split or 25–40′ continuous)";
pub const FARTLEK_HILLS: &str = "Fartlek / medium hills (e.g., 1′/1′ × 30–40′)";
pub const VO2_MICRO: &str = "VO₂ micro (30/30s, 12–18′ on-time)";
pub const MP_ALTERNATIONS: &str = "MP (alternations, ~30–45′ MP total)";
pub const VO2_BIG: &str = "VO₂ big (e.g., 5×1k or 6×800 @ ~5k)";
pub const MP_BIG: &str = "MP big (continuous ≥45′ at MP)";
pub const LONG_PROGRESSION: &str = "Long progression / MP-lite finish (last 15–25′ steady/MP-lite)";

/// ---------------------------------------------------------------------------
/// Catalog
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCatalog {
  pub long_runs: BTreeMap<LongRunKind, LongRunRule>,
  pub sessions: Vec<QualityRule>,
}

impl Default for RuleCatalog {
  fn default() -> Self {
    Self::builtin()
  }
}

impl RuleCatalog {
  /// Standard table used when no catalog file is configured
  pub fn builtin() -> Self {
    let long_runs = [
      (LongRunKind::Easy, "Long Easy (90–110′)", 1, 1),
      (LongRunKind::Progressive, "Progressive Long (MP-lite)", 2, 2),
      (LongRunKind::Hilly, "Hilly Long (with descents)", 2, 2),
      (LongRunKind::Big, "Big Easy (≥2h45 / ~22 mi)", 2, 2),
      (LongRunKind::Mp, "MP Long Block (≥45–60′ MP total)", 2, 3),
    ]
    .into_iter()
    .map(|(kind, label, before, after)| {
      (
        kind,
        LongRunRule {
          kind,
          label: label.to_string(),
          before,
          after,
        },
      )
    })
    .collect();

    let sessions = [
      (MEDIUM_LONG_EASY, 0, 1, 1, "Extended aerobic run with next-day easy buffer"),
      (THRESHOLD, 1, 1, 2, "Steady state effort via cruise reps or continuous block"),
      (FARTLEK_HILLS, 1, 1, 2, "Rolling fartlek or moderate hills stimulus"),
      (VO2_MICRO, 1, 1, 2, "Short VO₂ alternations capped at ~18′ on-time"),
      (MP_ALTERNATIONS, 2, 2, 4, "Marathon pace alternations totalling 30–45 minutes"),
      (VO2_BIG, 2, 2, 4, "Classic VO₂ workouts with full 5k-level reps"),
      (MP_BIG, 2, 3, 5, "Extended marathon pace continuous effort"),
      (LONG_PROGRESSION, 2, 2, 4, "Long run finishing steady or MP-lite for 15–25 minutes"),
    ]
    .into_iter()
    .map(|(key, before, after, weight, description)| QualityRule {
      key: key.to_string(),
      before,
      after,
      weight,
      description: Some(description.to_string()),
    })
    .collect();

    Self { long_runs, sessions }
  }

  /// Parse and validate a catalog from JSON
  pub fn from_json(json: &str) -> Result<Self, PlanError> {
    let catalog: Self =
      serde_json::from_str(json).map_err(|e| PlanError::CatalogParse(e.to_string()))?;
    catalog.validate()?;
    Ok(catalog)
  }

  pub fn from_path(path: &Path) -> Result<Self, PlanError> {
    let json = std::fs::read_to_string(path)
      .map_err(|e| PlanError::CatalogIo(format!("{}: {}", path.display(), e)))?;
    let catalog = Self::from_json(&json)?;
    tracing::info!(
      path = %path.display(),
      long_runs = catalog.long_runs.len(),
      sessions = catalog.sessions.len(),
      "Loaded rule catalog"
    );
    Ok(catalog)
  }

  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }

  /// Long runs must be filed under their own kind; session keys must be unique
  pub fn validate(&self) -> Result<(), PlanError> {
    for (kind, rule) in &self.long_runs {
      if rule.kind != *kind {
        return Err(PlanError::CatalogMismatch(format!(
          "long run entry '{}' declares kind '{}'",
          kind, rule.kind
        )));
      }
    }
    let mut seen = BTreeSet::new();
    for rule in &self.sessions {
      if !seen.insert(rule.key.as_str()) {
        return Err(PlanError::CatalogMismatch(format!(
          "session '{}' is listed more than once",
          rule.key
        )));
      }
    }
    Ok(())
  }

  /// Resolve a long run rule. A missing entry is a catalog/caller mismatch.
  pub fn long_run(&self, kind: LongRunKind) -> Result<&LongRunRule, PlanError> {
    self
      .long_runs
      .get(&kind)
      .ok_or(PlanError::MissingLongRunRule(kind))
  }

  pub fn session(&self, key: &str) -> Option<&QualityRule> {
    self.sessions.iter().find(|rule| rule.key == key)
  }

  /// Session keys in catalog order
  pub fn session_keys(&self) -> impl Iterator<Item = &str> {
    self.sessions.iter().map(|rule| rule.key.as_str())
  }
}
