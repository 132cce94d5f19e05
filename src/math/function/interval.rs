use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Endpoint
// ─────────────────────────────────────────────────────────────────────────────

/// One end of an `Interval`.
///
/// An infinite bound is always treated as open, whatever variant carries it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Endpoint {
    Open(f64),
    Closed(f64)
}

impl Endpoint {
    pub fn value(&self) -> f64 {
        match self {
            Endpoint::Open(v) | Endpoint::Closed(v) => *v
        }
    }

    pub fn is_closed(&self) -> bool {
        match self {
            Endpoint::Open(_) => false,
            Endpoint::Closed(v) => v.is_finite()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Interval
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    lower: Endpoint,
    upper: Endpoint
}

impl Interval {
    pub fn new(lower: Endpoint, upper: Endpoint) -> Interval {
        Interval { lower, upper }
    }

    /// `(lower, upper)`
    pub fn open(lower: f64, upper: f64) -> Interval {
        Interval::new(Endpoint::Open(lower), Endpoint::Open(upper))
    }

    /// `[lower, upper]`
    pub fn closed(lower: f64, upper: f64) -> Interval {
        Interval::new(Endpoint::Closed(lower), Endpoint::Closed(upper))
    }

    /// `[lower, +inf)`
    pub fn at_least(lower: f64) -> Interval {
        Interval::new(Endpoint::Closed(lower), Endpoint::Open(f64::INFINITY))
    }

    pub fn contains(&self, x: f64) -> bool {
        if x.is_nan() {
            return false;
        }
        let above_lower = if self.lower.is_closed() {
            x >= self.lower.value()
        } else {
            x > self.lower.value()
        };
        let below_upper = if self.upper.is_closed() {
            x <= self.upper.value()
        } else {
            x < self.upper.value()
        };
        above_lower && below_upper
    }

    pub fn is_empty(&self) -> bool {
        let (l, u) = (self.lower.value(), self.upper.value());
        if l.is_nan() || u.is_nan() || l > u {
            true
        } else if l == u {
            !(self.lower.is_closed() && self.upper.is_closed())
        } else {
            false
        }
    }

    /// Whether some point lies in both intervals.
    pub fn overlaps(&self, other: &Interval) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        // 取兩者中較高的下界與較低的上界
        let lower = if self.lower.value() > other.lower.value() {
            self.lower
        } else if self.lower.value() < other.lower.value() {
            other.lower
        } else if self.lower.is_closed() && other.lower.is_closed() {
            self.lower
        } else {
            Endpoint::Open(self.lower.value())
        };
        let upper = if self.upper.value() < other.upper.value() {
            self.upper
        } else if self.upper.value() > other.upper.value() {
            other.upper
        } else if self.upper.is_closed() && other.upper.is_closed() {
            self.upper
        } else {
            Endpoint::Open(self.upper.value())
        };
        !Interval::new(lower, upper).is_empty()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open_bracket = if self.lower.is_closed() { '[' } else { '(' };
        let close_bracket = if self.upper.is_closed() { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open_bracket, self.lower.value(), self.upper.value(), close_bracket)
    }
}
