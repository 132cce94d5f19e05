use chrono::{
    TimeZone,
    Utc
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::error;
use tracing_subscriber::EnvFilter;

use fuzzytime::configuration::TrapeziumConfiguration;
use fuzzytime::temporalevent::randomevents::generate_random_events;
use fuzzytime::temporalevent::temporalevent::TemporalEvent;
use fuzzytime::time::timeinterval::TimeInterval;
use fuzzytime::time::unixtime::from_unix_time;

const EVENT_COUNT: usize = 20;
const SEED: u64 = 2010;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(config_path) => match TrapeziumConfiguration::from_reader(&config_path) {
            Ok(config) => config,
            Err(err) => {
                error!(%config_path, %err, "failed to load configuration");
                std::process::exit(1);
            }
        },
        None => TrapeziumConfiguration::default()
    };

    let year_2010 = TimeInterval::new(
        Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2011, 1, 1, 0, 0, 0).unwrap()
    ).unwrap();
    let mut rng = StdRng::seed_from_u64(SEED);
    let events = match generate_random_events(&mut rng, &year_2010, EVENT_COUNT, config) {
        Ok(events) => events,
        Err(err) => {
            error!(%err, "failed to generate events");
            std::process::exit(1);
        }
    };

    let format_time = |t: f64| from_unix_time(t).map_or_else(|| t.to_string(), |d| d.to_rfc3339());
    for pair in events.windows(2) {
        let (event_1, event_2) = (&pair[0], &pair[1]);
        println!("[{}, {}] vs [{}, {}]",
                 format_time(event_1.a()),
                 format_time(event_1.b()),
                 format_time(event_2.a()),
                 format_time(event_2.b()));
        match event_1.boundary_relations(event_2) {
            Ok(relations) => {
                for (name, r) in [("beginning/beginning", relations.beginning_beginning),
                                  ("beginning/ending", relations.beginning_ending),
                                  ("ending/beginning", relations.ending_beginning),
                                  ("ending/ending", relations.ending_ending)] {
                    println!("  {:<20} before {:.4}, same {:.4}, after {:.4}", name, r.before(), r.same(), r.after());
                }
            },
            Err(err) => error!(%err, "comparison failed")
        }
    }
}
