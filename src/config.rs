//! Planner configuration from the environment
//!
//! - `PLANNER_CATALOG_PATH`: JSON rule catalog replacing the built-in table
//! - `PLANNER_LOG_LEVEL`: default log level when `RUST_LOG` is unset

use std::env;
use std::path::PathBuf;

use crate::catalog::RuleCatalog;
use crate::errors::PlanError;

const CATALOG_PATH_VAR: &str = "PLANNER_CATALOG_PATH";
const LOG_LEVEL_VAR: &str = "PLANNER_LOG_LEVEL";
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
  pub catalog_path: Option<PathBuf>,
  pub log_level: String,
}

impl Default for PlannerConfig {
  fn default() -> Self {
    Self {
      catalog_path: None,
      log_level: DEFAULT_LOG_LEVEL.to_string(),
    }
  }
}

impl PlannerConfig {
  pub fn from_env() -> Result<Self, PlanError> {
    let catalog_path = env::var(CATALOG_PATH_VAR)
      .ok()
      .filter(|p| !p.trim().is_empty())
      .map(PathBuf::from);

    let log_level = env::var(LOG_LEVEL_VAR)
      .map(|l| l.trim().to_lowercase())
      .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    if !LOG_LEVELS.contains(&log_level.as_str()) {
      return Err(PlanError::Config(format!(
        "{} must be one of {}, got '{}'",
        LOG_LEVEL_VAR,
        LOG_LEVELS.join(", "),
        log_level
      )));
    }

    Ok(Self {
      catalog_path,
      log_level,
    })
  }

  /// The configured catalog file, or the built-in table
  pub fn catalog(&self) -> Result<RuleCatalog, PlanError> {
    match &self.catalog_path {
      Some(path) => RuleCatalog::from_path(path),
      None => Ok(RuleCatalog::builtin()),
    }
  }
}
