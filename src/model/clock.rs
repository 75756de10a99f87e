//! Wall-clock access for the "now" marker on the calendar grid.
//!
//! The marker is always computed in a fixed timezone, never in the host's
//! local time, so the clock is a capability that can be swapped in tests.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use std::time::{Duration, Instant};

/// How often the "now" marker is recomputed.
pub const INDICATOR_REFRESH: Duration = Duration::from_secs(60);

/// Something that can tell the current wall-clock time in some timezone.
pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    fn time_of_day(&self) -> NaiveTime {
        self.now().time()
    }
}

/// Reads the system clock and converts it into a fixed IANA timezone.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl TimeSource for ZonedClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// Vertical offset of `time` on an hour axis with `hour_height` px per hour.
pub fn indicator_position(time: NaiveTime, hour_height: f32) -> f32 {
    (time.hour() as f32 + time.minute() as f32 / 60.0) * hour_height
}

/// The "now" marker and its refresh cadence.
#[derive(Debug, Clone)]
pub struct TimeIndicator {
    hour_height: f32,
    refresh_every: Duration,
    position: f32,
    last_refresh: Option<Instant>,
}

impl TimeIndicator {
    pub fn new(hour_height: f32) -> Self {
        Self {
            hour_height,
            refresh_every: INDICATOR_REFRESH,
            position: 0.0,
            last_refresh: None,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Recompute the position if this is the first tick or a full refresh
    /// interval has elapsed. Returns true when the position was recomputed.
    pub fn tick(&mut self, now: Instant, clock: &dyn TimeSource) -> bool {
        let due = match self.last_refresh {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.refresh_every,
        };
        if !due {
            return false;
        }
        self.position = indicator_position(clock.time_of_day(), self.hour_height);
        self.last_refresh = Some(now);
        true
    }

    /// Time left until the next scheduled refresh.
    pub fn until_next(&self, now: Instant) -> Duration {
        match self.last_refresh {
            None => Duration::ZERO,
            Some(last) => (last + self.refresh_every).saturating_duration_since(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedClock(Cell<NaiveDateTime>);

    impl FixedClock {
        fn at(h: u32, m: u32) -> Self {
            Self(Cell::new(Self::on_day(h, m)))
        }

        fn set(&self, h: u32, m: u32) {
            self.0.set(Self::on_day(h, m));
        }

        fn on_day(h: u32, m: u32) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(h, m, 0)
                .unwrap()
        }
    }

    impl TimeSource for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0.get()
        }
    }

    #[test]
    fn position_is_hours_times_row_height() {
        let t = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        assert_eq!(indicator_position(t, 120.0), 1740.0);
        assert_eq!(indicator_position(NaiveTime::MIN, 120.0), 0.0);
    }

    #[test]
    fn first_tick_computes_immediately() {
        let clock = FixedClock::at(9, 15);
        let mut indicator = TimeIndicator::new(120.0);
        assert!(indicator.tick(Instant::now(), &clock));
        assert_eq!(indicator.position(), 1110.0);
    }

    #[test]
    fn refreshes_only_once_per_interval() {
        let clock = FixedClock::at(10, 0);
        let mut indicator = TimeIndicator::new(120.0);
        let start = Instant::now();
        indicator.tick(start, &clock);

        clock.set(10, 30);
        assert!(!indicator.tick(start + Duration::from_secs(30), &clock));
        assert_eq!(indicator.position(), 1200.0);
        assert_eq!(
            indicator.until_next(start + Duration::from_secs(30)),
            Duration::from_secs(30)
        );

        assert!(indicator.tick(start + Duration::from_secs(60), &clock));
        assert_eq!(indicator.position(), 1260.0);
    }

    #[test]
    fn zoned_clock_ignores_host_timezone() {
        let kolkata = ZonedClock::new(chrono_tz::Asia::Kolkata);
        let utc = Utc::now().time();
        let local = kolkata.time_of_day();
        // Kolkata is UTC+05:30 all year round.
        let diff = (local - utc).num_minutes().rem_euclid(24 * 60);
        assert!((329..=331).contains(&diff), "offset was {diff} minutes");
    }
}
