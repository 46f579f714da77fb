use crate::DayIndex;
use chrono::Utc;

pub const MILLIS_PER_DAY: i64 = 86_400_000;

pub trait Clock {
    fn today(&self) -> DayIndex;
}

/// Wall clock: `floor(unix_millis / 86_400_000)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> DayIndex {
        day_index_from_millis(Utc::now().timestamp_millis())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub DayIndex);

impl Clock for FixedClock {
    fn today(&self) -> DayIndex {
        self.0
    }
}

pub fn day_index_from_millis(millis: i64) -> DayIndex {
    millis.div_euclid(MILLIS_PER_DAY)
}
