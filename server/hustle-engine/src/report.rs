//! Assemble the full worth result: score, valuation, tier, message, stats.

use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use tracing::debug;

use crate::config::Config;
use crate::message;
use crate::naira;
use crate::score;
use crate::types::*;

/// Display stats shown next to the score.
pub fn compute_stats(snapshot: &Snapshot, now: DateTime<Utc>, config: &Config) -> WorthStats {
  let repos = &snapshot.repos;
  let private = snapshot.private_activity.as_ref();

  WorthStats {
    followers: snapshot.profile.followers,
    total_stars: repos.iter().map(|r| r.stars as u64).sum(),
    total_forks: repos.iter().map(|r| r.forks as u64).sum(),
    public_repos: snapshot.profile.public_repos,
    original_repos: repos.iter().filter(|r| r.is_original()).count(),
    active_repos: repos
      .iter()
      .filter(|r| score::is_active(r, now, config))
      .count(),
    languages: score::distinct_languages(repos)
      .into_iter()
      .map(str::to_string)
      .collect(),
    account_age_days: score::account_age_days(snapshot.profile.created_at, now),
    private_repos: private.map(|p| p.private_repo_count),
    private_contributions: private.map(|p| p.private_contribution_count),
  }
}

/// Score a validated snapshot and package everything the caller displays.
pub fn build_worth_result<R: Rng + ?Sized>(
  snapshot: &Snapshot,
  now: DateTime<Utc>,
  config: &Config,
  rng: &mut R,
) -> WorthResult {
  let profile = &snapshot.profile;
  let private = snapshot.private_activity.as_ref();

  let scored = score::calculate_hustle_score(profile, &snapshot.repos, private, now, config);
  let naira_value = naira::score_to_naira(scored.score);
  let tier = naira::affordability_tier(naira_value);

  debug!(
    login = %profile.login,
    score = scored.score,
    naira_value,
    tier = tier.label,
    private_mode = private.is_some(),
    "scored profile"
  );

  WorthResult {
    username: profile.login.clone(),
    avatar_url: profile.avatar_url.clone(),
    name: profile.name.clone(),
    bio: profile.bio.clone(),
    profile_url: profile.html_url.clone(),
    hustle_score: scored.score,
    naira_value,
    naira_display: naira::format_naira(naira_value),
    affordability_tier: tier.clone(),
    message: message::get_message(scored.score, rng),
    breakdown: scored.breakdown,
    stats: compute_stats(snapshot, now, config),
    is_private_mode: private.is_some(),
    evaluated_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
  }
}
