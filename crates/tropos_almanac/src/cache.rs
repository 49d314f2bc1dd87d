//! Process-wide annual calendar cache.
//!
//! The one piece of shared mutable state in the engine. A mutex-guarded
//! map serializes writes; cached calendars are handed out as `Arc`
//! snapshots so reads after retrieval never block. Concurrent requests for
//! the same uncached year coalesce: the first caller builds while the rest
//! wait on the in-flight slot.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::warn;
use tropos_search::SearchConfig;

use crate::calendar::{build_calendar, AnnualCalendar};
use crate::error::AlmanacError;

/// Default time-to-live for cached calendars.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Time source for TTL checks, injectable so tests control staleness.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

enum Slot {
    /// A build is in flight; waiters block on the condvar.
    Building,
    /// A completed calendar with its build timestamp inside.
    Ready(Arc<AnnualCalendar>),
}

enum Action {
    Return(Arc<AnnualCalendar>),
    Wait,
    Build,
}

/// Year-keyed calendar cache with TTL invalidation and build coalescing.
pub struct CalendarCache {
    slots: Mutex<HashMap<i32, Slot>>,
    build_done: Condvar,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
    config: SearchConfig,
    builds: AtomicU64,
}

impl CalendarCache {
    /// Cache with the system clock and the default 24-hour TTL.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_clock(config, DEFAULT_TTL, Arc::new(SystemClock))
    }

    /// Cache with an injected TTL and clock.
    pub fn with_clock(config: SearchConfig, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            build_done: Condvar::new(),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            clock,
            config,
            builds: AtomicU64::new(0),
        }
    }

    /// Return the cached calendar for `year`, building it if absent or
    /// stale.
    ///
    /// At most one build per year is in flight at a time; a request
    /// arriving mid-build waits for the in-flight result instead of
    /// duplicating the root-finding work. A failed build leaves the slot
    /// absent so the next request retries.
    pub fn get_or_build(&self, year: i32) -> Result<Arc<AnnualCalendar>, AlmanacError> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());

        loop {
            let action = match slots.get(&year) {
                Some(Slot::Ready(cal)) if self.is_fresh(cal) => {
                    Action::Return(Arc::clone(cal))
                }
                Some(Slot::Ready(_)) => Action::Build, // stale, rebuild
                Some(Slot::Building) => Action::Wait,
                None => Action::Build,
            };
            match action {
                Action::Return(cal) => return Ok(cal),
                Action::Wait => {
                    slots = self
                        .build_done
                        .wait(slots)
                        .unwrap_or_else(|e| e.into_inner());
                }
                Action::Build => break,
            }
        }

        slots.insert(year, Slot::Building);
        drop(slots);

        let built_at = self.clock.now();
        self.builds.fetch_add(1, Ordering::Relaxed);
        let result = build_calendar(year, &self.config, built_at);

        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        match result {
            Ok(calendar) => {
                let calendar = Arc::new(calendar);
                slots.insert(year, Slot::Ready(Arc::clone(&calendar)));
                self.build_done.notify_all();
                Ok(calendar)
            }
            Err(err) => {
                slots.remove(&year);
                self.build_done.notify_all();
                warn!(year, error = %err, "calendar build failed; entry left absent");
                Err(err)
            }
        }
    }

    /// Drop one year's entry, or the whole cache when `year` is `None`.
    ///
    /// Only completed entries are dropped: an in-flight build finishes and
    /// is cached by its builder.
    pub fn invalidate(&self, year: Option<i32>) {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        match year {
            Some(y) => {
                if matches!(slots.get(&y), Some(Slot::Ready(_))) {
                    slots.remove(&y);
                }
            }
            None => slots.retain(|_, slot| matches!(slot, Slot::Building)),
        }
    }

    /// Number of builds performed since construction (instrumentation).
    pub fn build_count(&self) -> u64 {
        self.builds.load(Ordering::Relaxed)
    }

    /// Number of completed entries currently cached.
    pub fn len(&self) -> usize {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots
            .values()
            .filter(|slot| matches!(slot, Slot::Ready(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The search configuration builds run with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn is_fresh(&self, calendar: &AnnualCalendar) -> bool {
        self.clock.now().signed_duration_since(calendar.built_at) < self.ttl
    }
}

impl std::fmt::Debug for CalendarCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarCache")
            .field("entries", &self.len())
            .field("builds", &self.build_count())
            .field("ttl", &self.ttl)
            .finish()
    }
}
