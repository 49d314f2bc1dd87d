//! Cache lifecycle: TTL staleness, invalidation, build coalescing, and
//! failure atomicity.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tropos_almanac::{CalendarCache, Clock};
use tropos_search::SearchConfig;

/// Test clock whose "now" is advanced by hand.
struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap();
        *now = *now + delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

fn manual_cache() -> (CalendarCache, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let cache = CalendarCache::with_clock(
        SearchConfig::default(),
        Duration::from_secs(24 * 60 * 60),
        Arc::clone(&clock) as Arc<dyn Clock>,
    );
    (cache, clock)
}

#[test]
fn second_request_within_ttl_is_shared() {
    let (cache, _clock) = manual_cache();
    let a = cache.get_or_build(2025).expect("first build");
    let b = cache.get_or_build(2025).expect("cached");
    assert!(Arc::ptr_eq(&a, &b), "expected the same cached calendar");
    assert_eq!(a.built_at, b.built_at);
    assert_eq!(cache.build_count(), 1);
}

#[test]
fn stale_entry_rebuilds_with_same_instants() {
    let (cache, clock) = manual_cache();
    let first = cache.get_or_build(2025).expect("first build");
    clock.advance(TimeDelta::hours(25));

    let second = cache.get_or_build(2025).expect("rebuild");
    assert_eq!(cache.build_count(), 2);
    assert_ne!(first.built_at, second.built_at);
    for (a, b) in first.entries.iter().zip(&second.entries) {
        assert!(
            (a.ingress_jd - b.ingress_jd).abs() < 1e-9,
            "{} moved between rebuilds",
            a.sign.name()
        );
    }
}

#[test]
fn invalidate_single_year() {
    let (cache, _clock) = manual_cache();
    cache.get_or_build(2024).expect("build 2024");
    cache.get_or_build(2025).expect("build 2025");
    assert_eq!(cache.len(), 2);

    cache.invalidate(Some(2024));
    assert_eq!(cache.len(), 1);

    cache.get_or_build(2024).expect("rebuild 2024");
    assert_eq!(cache.build_count(), 3);
}

#[test]
fn invalidate_all() {
    let (cache, _clock) = manual_cache();
    cache.get_or_build(2024).expect("build");
    cache.get_or_build(2025).expect("build");
    cache.invalidate(None);
    assert!(cache.is_empty());
}

#[test]
fn concurrent_requests_coalesce_to_one_build() {
    let (cache, _clock) = manual_cache();
    let cache = Arc::new(cache);

    thread::scope(|s| {
        let mut handles = Vec::new();
        for _ in 0..4 {
            let cache = Arc::clone(&cache);
            handles.push(s.spawn(move || cache.get_or_build(2031)));
        }
        for handle in handles {
            let calendar = handle.join().expect("thread").expect("build");
            assert_eq!(calendar.year, 2031);
        }
    });

    assert_eq!(
        cache.build_count(),
        1,
        "concurrent requests must share one build"
    );
}

#[test]
fn failed_build_leaves_cache_empty_and_retries() {
    let config = SearchConfig {
        scan_step_days: 1.0,
        tolerance_deg: 1e-12,
        max_iterations: 2,
    };
    let cache = CalendarCache::new(config);

    assert!(cache.get_or_build(2025).is_err());
    assert!(cache.is_empty(), "failed build must not be cached");

    // The failure is deterministic; the point is that the slot was
    // released and a new attempt actually runs.
    assert!(cache.get_or_build(2025).is_err());
    assert_eq!(cache.build_count(), 2);
}
