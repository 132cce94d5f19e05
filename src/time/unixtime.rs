use chrono::{
    DateTime,
    Utc
};

const NANOS_PER_SECOND: f64 = 1e9;

/// Seconds since the unix epoch, keeping sub-second precision.
#[inline]
pub fn to_unix_time(date_time: DateTime<Utc>) -> f64 {
    date_time.timestamp() as f64 + date_time.timestamp_subsec_nanos() as f64 / NANOS_PER_SECOND
}

/// `None` when `unix_time` is not finite or falls outside chrono's range.
pub fn from_unix_time(unix_time: f64) -> Option<DateTime<Utc>> {
    if !unix_time.is_finite() {
        return None;
    }
    let seconds = unix_time.floor();
    if seconds < i64::MIN as f64 || seconds > i64::MAX as f64 {
        return None;
    }
    let nanos = ((unix_time - seconds) * NANOS_PER_SECOND).round().min(NANOS_PER_SECOND - 1.0) as u32;
    DateTime::<Utc>::from_timestamp(seconds as i64, nanos)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn epoch_is_zero() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(to_unix_time(epoch), 0.0);
        assert_eq!(from_unix_time(0.0), Some(epoch));
    }

    #[test]
    fn keeps_fractional_seconds() {
        let t = from_unix_time(1_262_304_000.25).unwrap();
        assert_eq!(t.timestamp(), 1_262_304_000);
        assert_eq!(t.timestamp_subsec_millis(), 250);
        assert!((to_unix_time(t) - 1_262_304_000.25).abs() < 1e-6);
    }

    #[test]
    fn negative_times_round_down() {
        let t = from_unix_time(-0.5).unwrap();
        assert_eq!(t.timestamp(), -1);
        assert_eq!(t.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn non_finite_has_no_date_time() {
        assert_eq!(from_unix_time(f64::NAN), None);
        assert_eq!(from_unix_time(f64::INFINITY), None);
    }
}
