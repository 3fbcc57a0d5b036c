//! Clock implementations

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a settable instant.
///
/// Cloning shares the underlying instant, so a test can hold one handle and
/// advance the clock seen by an engine holding another.
#[derive(Clone, Debug)]
pub struct FixedClock {
    value: Arc<RwLock<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        FixedClock {
            value: Arc::new(RwLock::new(at)),
        }
    }

    /// Move the clock to an arbitrary instant, forwards or backwards
    pub fn set(&self, at: DateTime<Utc>) {
        *self.value.write() = at;
    }

    /// Move the clock forward, saturating at the representable maximum
    pub fn advance(&self, by: Duration) {
        let mut value = self.value.write();
        let millis = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        let target = value.timestamp_millis().saturating_add(millis);
        if let Some(next) = DateTime::from_timestamp_millis(target) {
            *value = next;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.value.read()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
