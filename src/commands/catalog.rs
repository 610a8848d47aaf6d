//! Commands for browsing the rule catalog

use serde::Serialize;

use crate::catalog::RuleCatalog;
use crate::models::LongRunRule;
use crate::presentation::{all_sessions, SessionDisplay};

#[derive(Debug, Clone, Serialize)]
pub struct CatalogListing {
  pub long_runs: Vec<LongRunRule>,
  pub sessions: Vec<SessionDisplay>,
}

/// Every long run type and quality session on offer
pub fn list(catalog: &RuleCatalog) -> CatalogListing {
  CatalogListing {
    long_runs: catalog.long_runs.values().cloned().collect(),
    sessions: all_sessions(catalog),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_list_builtin() {
    let listing = list(&RuleCatalog::builtin());
    assert_eq!(listing.long_runs.len(), 5);
    assert_eq!(listing.sessions.len(), 8);
  }
}
