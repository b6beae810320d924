//! Time source for message timestamps and reply due times.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use crate::state::messaging::Timestamp;

pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall clock. Reads `Date.now()` in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(feature = "hydrate")]
    #[allow(clippy::cast_possible_truncation)]
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(js_sys::Date::now() as i64)
    }

    #[cfg(not(feature = "hydrate"))]
    fn now(&self) -> Timestamp {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX));
        Timestamp::from_millis(millis)
    }
}

/// Hand-advanced clock. Clones share the same instant.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicI64>,
}

impl ManualClock {
    #[must_use]
    pub fn starting_at(ts: Timestamp) -> Self {
        Self { now_ms: Arc::new(AtomicI64::new(ts.as_millis())) }
    }

    pub fn advance(&self, by: Duration) {
        let next = self.now().after(by);
        self.now_ms.store(next.as_millis(), Ordering::Relaxed);
    }

    pub fn set(&self, ts: Timestamp) {
        self.now_ms.store(ts.as_millis(), Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.now_ms.load(Ordering::Relaxed))
    }
}
