use serde::{Deserialize, Serialize};

use crate::errors::PlanError;

/// ---------------------------------------------------------------------------
/// Long Run Classification
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongRunKind {
  /// Long easy, 90-110 minutes
  Easy,
  /// Progressive long with an MP-lite finish
  Progressive,
  /// Hilly long with descents
  Hilly,
  /// Big easy, 2h45+ or roughly 22 miles
  Big,
  /// Long run carrying a marathon-pace block
  Mp,
}

impl LongRunKind {
  pub const ALL: [LongRunKind; 5] = [
    LongRunKind::Easy,
    LongRunKind::Progressive,
    LongRunKind::Hilly,
    LongRunKind::Big,
    LongRunKind::Mp,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Easy => "easy",
      Self::Progressive => "progressive",
      Self::Hilly => "hilly",
      Self::Big => "big",
      Self::Mp => "mp",
    }
  }
}

impl std::fmt::Display for LongRunKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for LongRunKind {
  type Err = PlanError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "easy" => Ok(Self::Easy),
      "progressive" => Ok(Self::Progressive),
      "hilly" => Ok(Self::Hilly),
      "big" => Ok(Self::Big),
      "mp" => Ok(Self::Mp),
      _ => Err(PlanError::UnknownLongRunType(s.to_string())),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Buffer Rules
/// ---------------------------------------------------------------------------

/// Buffers around the Sunday long run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongRunRule {
  pub kind: LongRunKind,
  pub label: String,
  /// Days before Sunday (counting back from Saturday) kept free of quality
  pub before: u8,
  /// Days after Sunday (counting forward from Monday) kept free of quality
  pub after: u8,
}

/// A quality session type and its spacing requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityRule {
  pub key: String,
  /// Easy-only days required immediately before the session
  pub before: u8,
  /// Easy-only days required after the session before the next quality
  pub after: u8,
  /// Scheduling priority, higher is placed first
  pub weight: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}
