//! Header wall clock
//!
//! Samples an injected time source once per period. Tests pass a fixed
//! source; the dashboard uses `Utc::now`.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::ticker::Simulator;

/// Header clock format: `MM/DD/YYYY, HH:MM:SS UTC`, 24-hour.
pub const CLOCK_FORMAT: &str = "%m/%d/%Y, %H:%M:%S UTC";

pub type TimeSource = fn() -> DateTime<Utc>;

pub struct ClockSimulator {
    period: Duration,
    source: TimeSource,
    now: DateTime<Utc>,
}

impl ClockSimulator {
    pub fn new(period: Duration) -> Self {
        Self::with_source(period, Utc::now)
    }

    pub fn with_source(period: Duration, source: TimeSource) -> Self {
        Self {
            period,
            source,
            now: source(),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Render a reading the way the header shows it.
pub fn format_clock(t: &DateTime<Utc>) -> String {
    t.format(CLOCK_FORMAT).to_string()
}

impl Simulator for ClockSimulator {
    type Snapshot = DateTime<Utc>;

    fn name(&self) -> &'static str {
        "clock"
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn tick(&mut self) {
        self.now = (self.source)();
    }

    fn snapshot(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 18, 5, 9).unwrap()
    }

    #[test]
    fn test_format() {
        assert_eq!(format_clock(&fixed()), "03/07/2024, 18:05:09 UTC");
    }

    #[test]
    fn test_tick_samples_source() {
        let mut clock = ClockSimulator::with_source(Duration::from_secs(1), fixed);
        assert_eq!(clock.now(), fixed());
        clock.tick();
        assert_eq!(clock.snapshot(), fixed());
    }
}
