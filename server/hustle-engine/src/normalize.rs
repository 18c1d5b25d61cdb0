//! Normalize inbound requests into validated snapshots.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::EngineError;
use crate::types::*;

/// Parse and validate a WorthRequest into a Snapshot.
///
/// Private stats never fail the request: if they cannot be trusted they are
/// dropped and the snapshot is scored on public data only.
pub fn normalize(raw: &WorthRequest) -> Result<Snapshot, EngineError> {
  let user = &raw.user;
  let login = user.login.trim();
  if login.is_empty() {
    return Err(EngineError::validation("user.login", "must not be empty"));
  }

  let created_at = parse_timestamp("user.created_at", &user.created_at)?;

  let profile = ProfileSnapshot {
    login: login.to_string(),
    avatar_url: user.avatar_url.clone(),
    name: user.name.clone(),
    bio: user.bio.clone(),
    html_url: user.html_url.clone(),
    public_repos: user.public_repos,
    followers: user.followers,
    following: user.following,
    created_at,
  };

  let repos = raw
    .repos
    .iter()
    .enumerate()
    .map(|(i, r)| {
      let updated_at = parse_timestamp(&format!("repos[{}].updated_at", i), &r.updated_at)?;
      Ok(RepositorySummary {
        name: r.name.clone(),
        stars: r.stargazers_count,
        forks: r.forks_count,
        language: r.language.clone().filter(|l| !l.is_empty()),
        updated_at,
        is_archived: r.archived,
        is_fork: r.fork,
      })
    })
    .collect::<Result<Vec<_>, EngineError>>()?;

  let private_activity = raw
    .private_stats
    .as_ref()
    .and_then(|p| normalize_private(&profile, p));

  Ok(Snapshot {
    profile,
    repos,
    private_activity,
  })
}

fn normalize_private(
  profile: &ProfileSnapshot,
  raw: &InboundPrivateStats,
) -> Option<PrivateActivity> {
  // The authenticated query reports its own creation time; a mismatch means
  // the token belongs to a different account than the profile being scored.
  if let Some(ts) = &raw.created_at {
    match DateTime::parse_from_rfc3339(ts) {
      Ok(t) if t.with_timezone(&Utc) == profile.created_at => {}
      Ok(t) => {
        warn!(
          login = %profile.login,
          private_created_at = %t,
          profile_created_at = %profile.created_at,
          "private stats belong to another account; scoring public data only"
        );
        return None;
      }
      Err(e) => {
        warn!(login = %profile.login, error = %e, "unparseable private stats created_at; scoring public data only");
        return None;
      }
    }
  }

  Some(PrivateActivity {
    private_repo_count: raw.private_repos,
    private_contribution_count: raw.private_contributions,
  })
}

fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, EngineError> {
  DateTime::parse_from_rfc3339(value)
    .map(|t| t.with_timezone(&Utc))
    .map_err(|e| EngineError::validation(field, &format!("invalid RFC3339: {}", e)))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn request() -> WorthRequest {
    WorthRequest {
      user: InboundUser {
        login: "ada".into(),
        avatar_url: String::new(),
        name: None,
        bio: None,
        html_url: String::new(),
        public_repos: 1,
        followers: 3,
        following: 1,
        created_at: "2020-01-01T00:00:00Z".into(),
      },
      repos: vec![InboundRepo {
        name: "engine".into(),
        stargazers_count: 2,
        forks_count: 0,
        language: Some("Rust".into()),
        updated_at: "2024-06-01T12:00:00Z".into(),
        archived: false,
        fork: false,
      }],
      private_stats: None,
    }
  }

  #[test]
  fn parses_valid_request() {
    let snap = normalize(&request()).unwrap();
    assert_eq!(snap.profile.login, "ada");
    assert_eq!(snap.repos.len(), 1);
    assert_eq!(snap.repos[0].stars, 2);
    assert!(snap.private_activity.is_none());
  }

  #[test]
  fn bad_repo_timestamp_names_the_field() {
    let mut raw = request();
    raw.repos[0].updated_at = "yesterday".into();
    let err = normalize(&raw).unwrap_err();
    assert_eq!(err.field(), Some("repos[0].updated_at"));
  }

  #[test]
  fn empty_login_is_rejected() {
    let mut raw = request();
    raw.user.login = "  ".into();
    let err = normalize(&raw).unwrap_err();
    assert!(err.to_string().contains("user.login"));
  }

  #[test]
  fn login_is_trimmed() {
    let mut raw = request();
    raw.user.login = "  ada \n".into();
    let snap = normalize(&raw).unwrap();
    assert_eq!(snap.profile.login, "ada");
  }

  #[test]
  fn empty_language_is_treated_as_missing() {
    let mut raw = request();
    raw.repos[0].language = Some(String::new());
    let snap = normalize(&raw).unwrap();
    assert!(snap.repos[0].language.is_none());
  }

  #[test]
  fn private_stats_kept_when_account_matches() {
    let mut raw = request();
    raw.private_stats = Some(InboundPrivateStats {
      private_repos: 4,
      private_contributions: 120,
      created_at: Some("2020-01-01T00:00:00+00:00".into()),
    });
    let snap = normalize(&raw).unwrap();
    assert_eq!(
      snap.private_activity,
      Some(PrivateActivity {
        private_repo_count: 4,
        private_contribution_count: 120,
      })
    );
  }

  #[test]
  fn private_stats_dropped_on_account_mismatch() {
    let mut raw = request();
    raw.private_stats = Some(InboundPrivateStats {
      private_repos: 4,
      private_contributions: 120,
      created_at: Some("2019-05-05T00:00:00Z".into()),
    });
    let snap = normalize(&raw).unwrap();
    assert!(snap.private_activity.is_none());
  }

  #[test]
  fn private_stats_dropped_on_bad_timestamp() {
    let mut raw = request();
    raw.private_stats = Some(InboundPrivateStats {
      private_repos: 4,
      private_contributions: 120,
      created_at: Some("not-a-date".into()),
    });
    let snap = normalize(&raw).unwrap();
    assert!(snap.private_activity.is_none());
  }
}
