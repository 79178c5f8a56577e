//! Clock abstraction so the tracker can be driven at a fixed instant.

use chrono::{DateTime, FixedOffset, Utc};
use std::sync::Mutex;

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

/// A clock frozen at a given instant; `set`/`advance` move it explicitly.
#[derive(Debug)]
pub struct FixedClock {
    at: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at: Mutex::new(at) }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        match self.at.lock() {
            Ok(mut guard) => *guard = at,
            Err(poisoned) => *poisoned.into_inner() = at,
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        let next = self.now() + by;
        self.set(next);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        match self.at.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// One instant seen both in UTC (storage) and in the office offset
/// (calendar lookups, ledger date and time-of-day).
#[derive(Debug, Clone, Copy)]
pub struct Moment {
    pub utc: DateTime<Utc>,
    pub local: DateTime<FixedOffset>,
}

impl Moment {
    pub fn new(utc: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self {
            utc,
            local: utc.with_timezone(&offset),
        }
    }

    pub fn from_clock(clock: &dyn Clock, offset: FixedOffset) -> Self {
        Self::new(clock.now(), offset)
    }
}
