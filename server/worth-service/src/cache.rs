//! Time-bounded result cache with an injected clock.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

/// Source of "now" for expiry checks and engine evaluation.
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
  now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
  pub fn new(start: DateTime<Utc>) -> Self {
    Self {
      now: Mutex::new(start),
    }
  }

  pub fn advance(&self, by: Duration) {
    let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
    *now += by;
  }
}

impl Clock for ManualClock {
  fn now(&self) -> DateTime<Utc> {
    *self.now.lock().unwrap_or_else(|e| e.into_inner())
  }
}

#[derive(Debug, Clone)]
struct Entry<V> {
  value: V,
  inserted_at: DateTime<Utc>,
}

/// Map whose entries expire `ttl` after insertion.
///
/// When full, expired entries are purged first, then the oldest live entry
/// is evicted.
pub struct TtlCache<K, V> {
  entries: HashMap<K, Entry<V>>,
  ttl: Duration,
  capacity: usize,
  clock: Arc<dyn Clock>,
}

impl<K, V> TtlCache<K, V>
where
  K: Eq + Hash + Clone,
  V: Clone,
{
  pub fn new(ttl: Duration, capacity: usize, clock: Arc<dyn Clock>) -> Self {
    Self {
      entries: HashMap::new(),
      ttl,
      capacity: capacity.max(1),
      clock,
    }
  }

  fn is_fresh(&self, entry: &Entry<V>, now: DateTime<Utc>) -> bool {
    now - entry.inserted_at < self.ttl
  }

  /// Fresh value for `key`. A stale entry is removed.
  pub fn get(&mut self, key: &K) -> Option<V> {
    let now = self.clock.now();
    let fresh = self.entries.get(key).map(|e| self.is_fresh(e, now))?;
    if fresh {
      self.entries.get(key).map(|e| e.value.clone())
    } else {
      self.entries.remove(key);
      None
    }
  }

  pub fn insert(&mut self, key: K, value: V) {
    let now = self.clock.now();
    if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
      self.purge_expired();
      if self.entries.len() >= self.capacity {
        self.evict_oldest();
      }
    }
    self.entries.insert(
      key,
      Entry {
        value,
        inserted_at: now,
      },
    );
  }

  /// Drop every expired entry; returns how many were removed.
  pub fn purge_expired(&mut self) -> usize {
    let now = self.clock.now();
    let ttl = self.ttl;
    let before = self.entries.len();
    self.entries.retain(|_, e| now - e.inserted_at < ttl);
    before - self.entries.len()
  }

  fn evict_oldest(&mut self) {
    let oldest = self
      .entries
      .iter()
      .min_by_key(|(_, e)| e.inserted_at)
      .map(|(k, _)| k.clone());
    if let Some(k) = oldest {
      self.entries.remove(&k);
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn setup(ttl_secs: i64, capacity: usize) -> (Arc<ManualClock>, TtlCache<String, u32>) {
    let clock = Arc::new(ManualClock::new(
      Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap(),
    ));
    let cache = TtlCache::new(Duration::seconds(ttl_secs), capacity, clock.clone());
    (clock, cache)
  }

  #[test]
  fn returns_fresh_entry() {
    let (clock, mut cache) = setup(300, 8);
    cache.insert("octo".into(), 851);
    clock.advance(Duration::seconds(299));
    assert_eq!(cache.get(&"octo".to_string()), Some(851));
  }

  #[test]
  fn entry_expires_at_ttl() {
    let (clock, mut cache) = setup(300, 8);
    cache.insert("octo".into(), 851);
    clock.advance(Duration::seconds(300));
    assert_eq!(cache.get(&"octo".to_string()), None);
    assert!(cache.is_empty());
  }

  #[test]
  fn reinsert_refreshes_timestamp() {
    let (clock, mut cache) = setup(300, 8);
    cache.insert("octo".into(), 1);
    clock.advance(Duration::seconds(200));
    cache.insert("octo".into(), 2);
    clock.advance(Duration::seconds(200));
    assert_eq!(cache.get(&"octo".to_string()), Some(2));
  }

  #[test]
  fn full_cache_evicts_oldest() {
    let (clock, mut cache) = setup(300, 2);
    cache.insert("a".into(), 1);
    clock.advance(Duration::seconds(1));
    cache.insert("b".into(), 2);
    clock.advance(Duration::seconds(1));
    cache.insert("c".into(), 3);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&"a".to_string()), None);
    assert_eq!(cache.get(&"b".to_string()), Some(2));
    assert_eq!(cache.get(&"c".to_string()), Some(3));
  }

  #[test]
  fn full_cache_prefers_purging_expired() {
    let (clock, mut cache) = setup(10, 2);
    cache.insert("old".into(), 1);
    clock.advance(Duration::seconds(8));
    cache.insert("mid".into(), 2);
    clock.advance(Duration::seconds(5));
    cache.insert("new".into(), 3);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&"mid".to_string()), Some(2));
  }

  #[test]
  fn purge_counts_removed() {
    let (clock, mut cache) = setup(10, 8);
    cache.insert("a".into(), 1);
    cache.insert("b".into(), 2);
    clock.advance(Duration::seconds(11));
    cache.insert("c".into(), 3);
    assert_eq!(cache.purge_expired(), 2);
    assert_eq!(cache.len(), 1);
  }
}
