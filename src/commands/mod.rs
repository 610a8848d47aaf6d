pub mod catalog;
pub mod plan;

use serde::Serialize;

use crate::errors::PlanError;

/// Render a command response as pretty JSON for stdout
pub fn to_output<T: Serialize>(value: &T) -> Result<String, PlanError> {
  serde_json::to_string_pretty(value)
    .map_err(|e| PlanError::Output(e.to_string()))
}
