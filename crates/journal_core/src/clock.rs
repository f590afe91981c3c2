//! Injected wall-clock source.
//!
//! # Responsibility
//! - Keep "now" out of ambient reads so sessions and timelines are testable.

use chrono::{Local, NaiveDateTime};
use std::cell::Cell;

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the device's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a settable instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock};
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_returns_last_set_instant() {
        let first = NaiveDate::from_ymd_opt(2026, 3, 14)
            .and_then(|day| day.and_hms_opt(9, 12, 0))
            .expect("valid time");
        let second = first + chrono::Duration::minutes(5);

        let clock = FixedClock::new(first);
        assert_eq!(clock.now(), first);
        clock.set(second);
        assert_eq!((&clock).now(), second);
    }
}
