//! Placement priority for requested quality sessions

use crate::catalog::RuleCatalog;
use crate::models::QualityRule;

/// A requested session waiting for a day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedSession<'a> {
  pub key: &'a str,
  /// Position in the caller's selection list
  pub selection_index: usize,
  pub rule: &'a QualityRule,
}

/// Resolve selections against the catalog and sort them into placement order.
///
/// Unknown keys are dropped. Order is weight descending, then selection
/// index, then key, so identical input always yields the same queue.
pub fn order_sessions<'a>(selections: &'a [String], catalog: &'a RuleCatalog) -> Vec<QueuedSession<'a>> {
  let mut queue: Vec<QueuedSession<'a>> = selections
    .iter()
    .enumerate()
    .filter_map(|(selection_index, key)| {
      catalog.session(key).map(|rule| QueuedSession {
        key: key.as_str(),
        selection_index,
        rule,
      })
    })
    .collect();

  queue.sort_by(|a, b| {
    b.rule
      .weight
      .cmp(&a.rule.weight)
      .then(a.selection_index.cmp(&b.selection_index))
      .then_with(|| a.key.cmp(b.key))
  });

  queue
}
