//! Core types for the hustle engine (JSON contracts + internal models).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: provider REST field names)
// ---------------------------------------------------------------------------

/// One scoring request. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WorthRequest {
  pub user: InboundUser,
  #[serde(default)]
  pub repos: Vec<InboundRepo>,
  /// Present only when the visitor granted private access.
  #[serde(default)]
  pub private_stats: Option<InboundPrivateStats>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundUser {
  pub login: String,
  #[serde(default)]
  pub avatar_url: String,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub bio: Option<String>,
  #[serde(default)]
  pub html_url: String,
  #[serde(default)]
  pub public_repos: u32,
  pub followers: u32,
  pub following: u32,
  pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundRepo {
  #[serde(default)]
  pub name: String,
  pub stargazers_count: u32,
  #[serde(default)]
  pub forks_count: u32,
  #[serde(default)]
  pub language: Option<String>,
  pub updated_at: String,
  #[serde(default)]
  pub archived: bool,
  #[serde(default)]
  pub fork: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundPrivateStats {
  pub private_repos: u32,
  pub private_contributions: u32,
  /// Account creation time as seen by the authenticated query.
  #[serde(default)]
  pub created_at: Option<String>,
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
  pub login: String,
  pub avatar_url: String,
  pub name: Option<String>,
  pub bio: Option<String>,
  pub html_url: String,
  pub public_repos: u32,
  pub followers: u32,
  pub following: u32,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RepositorySummary {
  pub name: String,
  pub stars: u32,
  pub forks: u32,
  pub language: Option<String>,
  pub updated_at: DateTime<Utc>,
  pub is_archived: bool,
  pub is_fork: bool,
}

impl RepositorySummary {
  /// Counts toward "original" work: neither a fork nor archived.
  pub fn is_original(&self) -> bool {
    !self.is_fork && !self.is_archived
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivateActivity {
  pub private_repo_count: u32,
  pub private_contribution_count: u32,
}

/// Validated inputs for one evaluation.
#[derive(Debug, Clone)]
pub struct Snapshot {
  pub profile: ProfileSnapshot,
  pub repos: Vec<RepositorySummary>,
  pub private_activity: Option<PrivateActivity>,
}

// ---------------------------------------------------------------------------
// Score
// ---------------------------------------------------------------------------

/// Per-category points before summing and capping. `penalties` is subtracted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
  pub followers: f64,
  pub stars: f64,
  pub active_repos: f64,
  pub original_repos: f64,
  pub account_age: f64,
  pub language_diversity: f64,
  pub private_activity: f64,
  pub bonuses: f64,
  pub penalties: f64,
}

impl ScoreBreakdown {
  /// Raw total before flooring at zero and capping.
  pub fn raw_total(&self) -> f64 {
    self.followers
      + self.stars
      + self.active_repos
      + self.original_repos
      + self.account_age
      + self.language_diversity
      + self.private_activity
      + self.bonuses
      - self.penalties
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
  pub score: u32,
  pub breakdown: ScoreBreakdown,
}

// ---------------------------------------------------------------------------
// Affordability tiers
// ---------------------------------------------------------------------------

/// Half-open Naira range `[min_value, max_value)`; `None` means unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AffordabilityTier {
  pub label: &'static str,
  pub emoji: &'static str,
  pub description: &'static str,
  pub min_value: u64,
  pub max_value: Option<u64>,
}

impl AffordabilityTier {
  pub fn contains(&self, amount: u64) -> bool {
    amount >= self.min_value && self.max_value.map_or(true, |max| amount < max)
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorthStats {
  pub followers: u32,
  pub total_stars: u64,
  pub total_forks: u64,
  pub public_repos: u32,
  pub original_repos: usize,
  pub active_repos: usize,
  pub languages: Vec<String>,
  pub account_age_days: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub private_repos: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub private_contributions: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorthResult {
  pub username: String,
  pub avatar_url: String,
  pub name: Option<String>,
  pub bio: Option<String>,
  pub profile_url: String,
  pub hustle_score: u32,
  pub naira_value: u64,
  pub naira_display: String,
  pub affordability_tier: AffordabilityTier,
  pub message: &'static str,
  pub breakdown: ScoreBreakdown,
  pub stats: WorthStats,
  pub is_private_mode: bool,
  pub evaluated_at: String,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
