//! Engine configuration with sane defaults.

/// Activity windows and the score ceiling.
#[derive(Debug, Clone)]
pub struct Config {
  /// A repo updated within this many days counts as active.
  pub active_window_days: i64,
  /// Any repo updated within this many days earns the recent-activity bonus.
  pub recent_window_days: i64,
  /// No public update within this many days triggers the inactivity penalty.
  pub stale_window_days: i64,
  /// Hard ceiling on the final score.
  pub max_score: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      active_window_days: 90,
      recent_window_days: 30,
      stale_window_days: 180,
      max_score: 10_000,
    }
  }
}
