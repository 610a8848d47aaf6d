use serde::{Deserialize, Serialize};

/// Day of the training week, Monday first. Sunday is reserved for the long run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Weekday {
  Mon,
  Tue,
  Wed,
  Thu,
  Fri,
  Sat,
  Sun,
}

impl Weekday {
  /// Full week, Monday through Sunday
  pub const ALL: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
  ];

  /// Days that may host a quality session (everything but Sunday)
  pub const TRAINING_DAYS: [Weekday; 6] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
  ];

  pub fn index(self) -> u8 {
    self as u8
  }

  pub fn from_index(index: u8) -> Option<Self> {
    Self::ALL.get(index as usize).copied()
  }

  /// Step `days` back within the same week. `None` once it would fall before Monday.
  pub fn checked_back(self, days: u8) -> Option<Self> {
    self.index().checked_sub(days).and_then(Self::from_index)
  }

  pub fn is_long_run_day(self) -> bool {
    self == Weekday::Sun
  }

  /// Empty days strictly between two days of the week
  pub fn gap_to(self, later: Weekday) -> u8 {
    later.index().saturating_sub(self.index()).saturating_sub(1)
  }

  pub fn short_name(self) -> &'static str {
    match self {
      Weekday::Mon => "Mon",
      Weekday::Tue => "Tue",
      Weekday::Wed => "Wed",
      Weekday::Thu => "Thu",
      Weekday::Fri => "Fri",
      Weekday::Sat => "Sat",
      Weekday::Sun => "Sun",
    }
  }
}

impl From<Weekday> for u8 {
  fn from(day: Weekday) -> Self {
    day.index()
  }
}

impl TryFrom<u8> for Weekday {
  type Error = String;

  fn try_from(index: u8) -> Result<Self, Self::Error> {
    Weekday::from_index(index).ok_or_else(|| format!("Weekday index out of range: {}", index))
  }
}

impl std::fmt::Display for Weekday {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.short_name())
  }
}
