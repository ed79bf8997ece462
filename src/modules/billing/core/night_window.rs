// Nightly surcharge window on the wall clock.
//
// Purpose
// - Decide whether a wall-clock time, or a span of real time, touches the window.
//
// Notes
// - The window is half-open: the start is inside, the end is not.
// - A start later than the end wraps across midnight (22:00 -> 05:00).
// - Spans are read on the wall clock of their start instant's UTC offset.

use chrono::{DateTime, FixedOffset, NaiveTime, TimeDelta};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightWindow {
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
}

// Checked at compile time.
const NIGHT_STARTS_AT: NaiveTime = match NaiveTime::from_hms_opt(22, 0, 0) {
    Some(time) => time,
    None => panic!("invalid night start"),
};
const NIGHT_ENDS_AT: NaiveTime = match NaiveTime::from_hms_opt(5, 0, 0) {
    Some(time) => time,
    None => panic!("invalid night end"),
};

impl Default for NightWindow {
    fn default() -> Self {
        Self::new(NIGHT_STARTS_AT, NIGHT_ENDS_AT)
    }
}

impl NightWindow {
    pub fn new(starts_at: NaiveTime, ends_at: NaiveTime) -> Self {
        Self { starts_at, ends_at }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.starts_at <= self.ends_at {
            time >= self.starts_at && time < self.ends_at
        } else {
            time >= self.starts_at || time < self.ends_at
        }
    }

    /// Wall-clock distance from `time` to the next moment the window opens.
    fn until_next_start(&self, time: NaiveTime) -> TimeDelta {
        let delta = self.starts_at.signed_duration_since(time);
        if delta < TimeDelta::zero() {
            delta + TimeDelta::days(1)
        } else {
            delta
        }
    }

    /// True when `[start, end)` shares any time with the window. An empty span
    /// is judged by its start alone.
    pub fn overlaps(&self, start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> bool {
        if self.starts_at == self.ends_at {
            return false;
        }
        if self.contains(start.time()) {
            return true;
        }
        self.until_next_start(start.time()) < end.signed_duration_since(start)
    }
}
