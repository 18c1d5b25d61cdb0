//! Hustle score: capped weighted components, bonuses, and penalties.

use chrono::{DateTime, Duration, Utc};

use crate::config::Config;
use crate::types::*;

const FOLLOWER_POINTS: f64 = 5.0;
const FOLLOWER_CAP: f64 = 2500.0;
const STAR_POINTS: f64 = 3.0;
const STAR_CAP: f64 = 3000.0;
const ACTIVE_REPO_POINTS: f64 = 4.0;
const ACTIVE_REPO_CAP: f64 = 300.0;
const ORIGINAL_REPO_POINTS: f64 = 2.0;
const ORIGINAL_REPO_CAP: f64 = 200.0;
const YEAR_POINTS: f64 = 25.0;
const ACCOUNT_AGE_CAP: f64 = 250.0;
const LANGUAGE_POINTS: f64 = 10.0;
const LANGUAGE_CAP: f64 = 100.0;

// Private repos weigh half a public active repo; contributions are cheap.
const PRIVATE_REPO_POINTS: f64 = 2.0;
const PRIVATE_REPO_CAP: f64 = 400.0;
const PRIVATE_CONTRIBUTION_POINTS: f64 = 0.2;
const PRIVATE_CONTRIBUTION_CAP: f64 = 800.0;

const RECENT_ACTIVITY_BONUS: f64 = 50.0;
const POLYGLOT_BONUS: f64 = 30.0;
const POLYGLOT_MIN_LANGUAGES: usize = 4;
const FOLLOWER_RATIO_BONUS: f64 = 40.0;
const FOLLOWER_RATIO_MIN_FOLLOWERS: u32 = 10;
const BIO_BONUS: f64 = 20.0;

const INACTIVE_PENALTY: f64 = 100.0;
const INACTIVE_PRIVATE_CONTRIBUTIONS: u32 = 10;
const ONLY_FORKS_PENALTY: f64 = 150.0;
const EMPTY_PROFILE_PENALTY: f64 = 200.0;

/// Whole days since account creation. A creation time in the future clamps to 0.
pub fn account_age_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
  (now - created_at).num_days().max(0)
}

/// True if the repo was updated strictly after `now - days`.
pub fn updated_within(repo: &RepositorySummary, now: DateTime<Utc>, days: i64) -> bool {
  repo.updated_at > now - Duration::days(days)
}

/// Active: updated inside the active window and not archived.
pub fn is_active(repo: &RepositorySummary, now: DateTime<Utc>, config: &Config) -> bool {
  !repo.is_archived && updated_within(repo, now, config.active_window_days)
}

/// Distinct non-empty languages in first-seen order.
pub fn distinct_languages(repos: &[RepositorySummary]) -> Vec<&str> {
  let mut out: Vec<&str> = Vec::new();
  for lang in repos.iter().filter_map(|r| r.language.as_deref()) {
    if !out.contains(&lang) {
      out.push(lang);
    }
  }
  out
}

/// Points contributed by consented private activity.
pub fn private_activity_points(activity: &PrivateActivity) -> f64 {
  let repo_points =
    (activity.private_repo_count as f64 * PRIVATE_REPO_POINTS).min(PRIVATE_REPO_CAP);
  let contribution_points = (activity.private_contribution_count as f64
    * PRIVATE_CONTRIBUTION_POINTS)
    .min(PRIVATE_CONTRIBUTION_CAP);
  repo_points + contribution_points
}

/// Score 0..=max_score plus the per-category breakdown.
///
/// The breakdown is reported before flooring and capping, so its fields can
/// add up to more than `score` for very strong profiles.
pub fn calculate_hustle_score(
  profile: &ProfileSnapshot,
  repos: &[RepositorySummary],
  private_activity: Option<&PrivateActivity>,
  now: DateTime<Utc>,
  config: &Config,
) -> ScoreResult {
  let years_on_github = account_age_days(profile.created_at, now) as f64 / 365.0;

  let original_count = repos.iter().filter(|r| r.is_original()).count();
  let total_stars: u64 = repos.iter().map(|r| r.stars as u64).sum();
  let active_count = repos.iter().filter(|r| is_active(r, now, config)).count();
  let language_count = distinct_languages(repos).len();

  let mut breakdown = ScoreBreakdown {
    followers: (profile.followers as f64 * FOLLOWER_POINTS).min(FOLLOWER_CAP),
    stars: (total_stars as f64 * STAR_POINTS).min(STAR_CAP),
    active_repos: (active_count as f64 * ACTIVE_REPO_POINTS).min(ACTIVE_REPO_CAP),
    original_repos: (original_count as f64 * ORIGINAL_REPO_POINTS).min(ORIGINAL_REPO_CAP),
    account_age: (years_on_github * YEAR_POINTS).min(ACCOUNT_AGE_CAP),
    language_diversity: (language_count as f64 * LANGUAGE_POINTS).min(LANGUAGE_CAP),
    private_activity: private_activity.map_or(0.0, private_activity_points),
    bonuses: 0.0,
    penalties: 0.0,
  };

  // Bonuses
  if repos
    .iter()
    .any(|r| updated_within(r, now, config.recent_window_days))
  {
    breakdown.bonuses += RECENT_ACTIVITY_BONUS;
  }
  if language_count >= POLYGLOT_MIN_LANGUAGES {
    breakdown.bonuses += POLYGLOT_BONUS;
  }
  if profile.followers as u64 > profile.following as u64 * 2
    && profile.followers > FOLLOWER_RATIO_MIN_FOLLOWERS
  {
    breakdown.bonuses += FOLLOWER_RATIO_BONUS;
  }
  if profile.bio.as_deref().is_some_and(|b| !b.is_empty()) {
    breakdown.bonuses += BIO_BONUS;
  }

  // Penalties
  let has_private_repos = private_activity.is_some_and(|p| p.private_repo_count > 0);
  let has_private_contributions = private_activity
    .is_some_and(|p| p.private_contribution_count > INACTIVE_PRIVATE_CONTRIBUTIONS);
  let recently_touched = repos
    .iter()
    .any(|r| updated_within(r, now, config.stale_window_days));

  if !repos.is_empty() && !recently_touched && !has_private_contributions {
    breakdown.penalties += INACTIVE_PENALTY;
  }
  if !repos.is_empty() && original_count == 0 && !has_private_repos {
    breakdown.penalties += ONLY_FORKS_PENALTY;
  }
  if repos.is_empty() && !has_private_repos {
    breakdown.penalties += EMPTY_PROFILE_PENALTY;
  }

  let score = breakdown
    .raw_total()
    .round()
    .max(0.0)
    .min(config.max_score as f64) as u32;

  ScoreResult { score, breakdown }
}
