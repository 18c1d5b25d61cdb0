//! Integration tests for the hustle engine.

use chrono::{DateTime, TimeZone, Utc};
use hustle_engine::message::{LOW_SCORE_MESSAGES, MOTIVATIONAL_MESSAGES};
use hustle_engine::{run, WorthRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn now() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

fn parse(json: &str) -> WorthRequest {
  serde_json::from_str(json).unwrap()
}

fn worked_example() -> WorthRequest {
  // created_at is exactly 1095 days (3 years) before now(); the repo was updated 10 days ago.
  parse(
    r#"{
    "user": {
      "login": "octo",
      "avatar_url": "https://avatars.example/u/1",
      "name": "Octo",
      "bio": "hi",
      "html_url": "https://github.com/octo",
      "public_repos": 1,
      "followers": 100,
      "following": 20,
      "created_at": "2022-01-16T12:00:00Z"
    },
    "repos": [
      {
        "name": "tool",
        "stargazers_count": 50,
        "forks_count": 5,
        "language": "Go",
        "size": 1024,
        "updated_at": "2025-01-05T12:00:00Z",
        "archived": false,
        "fork": false
      }
    ]
  }"#,
  )
}

#[test]
fn worked_example_end_to_end() {
  let mut rng = StdRng::seed_from_u64(1);
  let result = run(&worked_example(), now(), &mut rng).unwrap();

  assert_eq!(result.hustle_score, 851);
  assert_eq!(result.breakdown.bonuses, 110.0);
  assert_eq!(result.breakdown.penalties, 0.0);
  assert_eq!(result.naira_value, 2_128_000);
  assert_eq!(result.naira_display, "₦2,128,000");
  assert_eq!(result.affordability_tier.label, "Recruiter Bait");
  assert!(MOTIVATIONAL_MESSAGES.contains(&result.message));
  assert_eq!(result.stats.account_age_days, 1095);
  assert_eq!(result.stats.total_forks, 5);
  assert!(!result.is_private_mode);
}

#[test]
fn deterministic_output_across_runs() {
  let request = worked_example();

  let mut rng1 = StdRng::seed_from_u64(5);
  let json1 = serde_json::to_string(&run(&request, now(), &mut rng1).unwrap()).unwrap();

  let mut rng2 = StdRng::seed_from_u64(5);
  let json2 = serde_json::to_string(&run(&request, now(), &mut rng2).unwrap()).unwrap();

  assert_eq!(json1, json2, "Same inputs and seed must produce identical JSON output");
}

#[test]
fn empty_profile_scores_low_and_gets_low_message() {
  let request = parse(
    r#"{
    "user": {
      "login": "newbie",
      "followers": 0,
      "following": 3,
      "created_at": "2024-12-01T00:00:00Z"
    },
    "repos": []
  }"#,
  );
  let mut rng = StdRng::seed_from_u64(2);
  let result = run(&request, now(), &mut rng).unwrap();

  assert_eq!(result.hustle_score, 0);
  assert_eq!(result.breakdown.penalties, 200.0);
  assert_eq!(result.affordability_tier.label, "Vibes & Data");
  assert!(LOW_SCORE_MESSAGES.contains(&result.message));
}

#[test]
fn private_stats_switch_on_private_mode() {
  let request = parse(
    r#"{
    "user": {
      "login": "quiet",
      "followers": 0,
      "following": 0,
      "created_at": "2020-01-01T00:00:00Z"
    },
    "repos": [],
    "private_stats": {
      "private_repos": 10,
      "private_contributions": 1000,
      "created_at": "2020-01-01T00:00:00Z"
    }
  }"#,
  );
  let mut rng = StdRng::seed_from_u64(3);
  let result = run(&request, now(), &mut rng).unwrap();

  assert!(result.is_private_mode);
  assert_eq!(result.breakdown.private_activity, 220.0);
  assert_eq!(result.breakdown.penalties, 0.0);

  let json = serde_json::to_value(&result).unwrap();
  assert_eq!(json["stats"]["private_repos"], 10);
}

#[test]
fn public_output_omits_private_stats() {
  let mut rng = StdRng::seed_from_u64(1);
  let result = run(&worked_example(), now(), &mut rng).unwrap();
  let json = serde_json::to_value(&result).unwrap();
  assert!(json["stats"].get("private_repos").is_none());
  assert_eq!(json["affordability_tier"]["max_value"], serde_json::Value::Null);
}

#[test]
fn invalid_timestamp_gives_clear_error() {
  let request = parse(
    r#"{
    "user": {
      "login": "octo",
      "followers": 1,
      "following": 1,
      "created_at": "last tuesday"
    }
  }"#,
  );
  let mut rng = StdRng::seed_from_u64(1);
  let err = run(&request, now(), &mut rng).unwrap_err();
  assert!(
    err.to_string().contains("user.created_at"),
    "Error should mention the field: {}",
    err
  );
}
