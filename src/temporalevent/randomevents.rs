use chrono::{
    DateTime,
    Utc
};
use rand::Rng;
use tracing::{
    info,
    warn
};

use crate::configuration::TrapeziumConfiguration;
use crate::temporalevent::temporaleventerror::TemporalEventError;
use crate::temporalevent::temporaleventtrapezium::{
    TemporalEventTrapezium,
    TrapeziumBuilder
};
use crate::time::timeinterval::TimeInterval;

/// `size` sampled trapezium events, each spanning a random sub-interval of
/// `interval`.
pub fn generate_random_events<R: Rng>(rng: &mut R,
                                      interval: &TimeInterval,
                                      size: usize,
                                      configuration: TrapeziumConfiguration) -> Result<Vec<TemporalEventTrapezium>, TemporalEventError> {
    let mut events = Vec::with_capacity(size);
    for _ in 0..size {
        let (start, end) = random_span(rng, interval, configuration.max_attempts())?;
        let event = TrapeziumBuilder::from_datetimes(start, end)
            .configuration(configuration)
            .build(rng)?;
        events.push(event);
    }
    info!(size, start = %interval.start(), end = %interval.end(), "generated random trapezium events");
    Ok(events)
}

/// 時間以奈秒表示，極短的區間可能抽到 `start == end`，重抽直到 `start < end`。
fn random_span<R: Rng>(rng: &mut R,
                       interval: &TimeInterval,
                       max_attempts: usize) -> Result<(DateTime<Utc>, DateTime<Utc>), TemporalEventError> {
    for _ in 0..max_attempts {
        let start = interval.random_time(rng);
        let end = interval.random_time_after(rng, start);
        if start < end {
            return Ok((start, end));
        }
    }
    warn!(max_attempts, start = %interval.start(), end = %interval.end(), "no non-empty sub-interval drawn");
    Err(TemporalEventError::Sampling { attempts: max_attempts })
}
