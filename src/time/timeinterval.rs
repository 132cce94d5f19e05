use chrono::{
    DateTime,
    Utc
};
use rand::Rng;

use crate::time::unixtime::{
    from_unix_time,
    to_unix_time
};

/// A half-open calendar interval `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>
}

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<TimeInterval> {
        if start < end {
            Some(TimeInterval { start, end })
        } else {
            None
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration_seconds(&self) -> f64 {
        to_unix_time(self.end) - to_unix_time(self.start)
    }

    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.end
    }

    /// Uniformly distributed in `[start, end)`.
    pub fn random_time<R: Rng + ?Sized>(&self, rng: &mut R) -> DateTime<Utc> {
        self.random_time_after(rng, self.start)
    }

    /// Uniformly distributed in `[max(after, start), end)`; `after` itself when
    /// it is not before `end`.
    pub fn random_time_after<R: Rng + ?Sized>(&self, rng: &mut R, after: DateTime<Utc>) -> DateTime<Utc> {
        let earliest = after.max(self.start);
        let lower = to_unix_time(earliest);
        let upper = to_unix_time(self.end);
        if lower >= upper {
            return after;
        }
        // f64 秒數的捨入誤差可能使結果略早於 earliest
        from_unix_time(rng.gen_range(lower..upper)).map_or(earliest, |t| t.max(earliest))
    }
}
