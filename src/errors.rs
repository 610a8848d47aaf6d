//! Error types for planner configuration and caller mistakes.
//!
//! An infeasible week is not an error: sessions that do not fit are
//! reported as warnings on the plan result.

use serde::Serialize;

use crate::models::LongRunKind;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
  #[error("Unknown long run type: {0}")]
  UnknownLongRunType(String),

  #[error("No long run rule configured for: {0}")]
  MissingLongRunRule(LongRunKind),

  #[error("Invalid long run distance: {0}")]
  InvalidDistance(f64),

  #[error("Failed to parse catalog: {0}")]
  CatalogParse(String),

  #[error("Failed to read catalog: {0}")]
  CatalogIo(String),

  #[error("Catalog entry mismatch: {0}")]
  CatalogMismatch(String),

  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Failed to serialize output: {0}")]
  Output(String),
}

impl Serialize for PlanError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}
