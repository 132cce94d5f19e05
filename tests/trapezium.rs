use rand::SeedableRng;
use rand::rngs::StdRng;

use fuzzytime::configuration::TrapeziumConfiguration;
use fuzzytime::distribution::boundeddistribution::BoundedDistribution;
use fuzzytime::temporalevent::temporalevent::TemporalEvent;
use fuzzytime::temporalevent::temporaleventerror::TemporalEventError;
use fuzzytime::temporalevent::temporaleventtrapezium::TemporalEventTrapezium;

#[test]
fn supplied_boundaries_give_fixed_supports() {
    let event = TemporalEventTrapezium::with_boundaries(0.0, 100.0, 10.0, 90.0).unwrap();
    assert_eq!(event.distribution_beginning().bounds(), (0.0, 10.0));
    assert_eq!(event.distribution_ending().bounds(), (90.0, 100.0));
    assert_eq!(event.distribution_beginning().mean(), 5.0);
    assert_eq!(event.distribution_ending().mean(), 95.0);
}

#[test]
fn beginning_with_factor_is_rejected() {
    let result = TemporalEventTrapezium::builder(0.0, 100.0)
        .beginning(10.0)
        .beginning_factor(3.0)
        .build(&mut StdRng::seed_from_u64(1));
    assert!(matches!(result, Err(TemporalEventError::Configuration(_))));
}

#[test]
fn thousand_sampled_events_respect_ordering() {
    let mut rng = StdRng::seed_from_u64(1_000);
    for _ in 0..1_000 {
        let event = TemporalEventTrapezium::builder(0.0, 100.0).build(&mut rng).unwrap();
        assert!(0.0 < event.beginning() && event.beginning() < event.ending() && event.ending() < 100.0);
    }
}

#[test]
fn tight_factors_cluster_boundaries_near_edges() {
    let mut rng = StdRng::seed_from_u64(17);
    let n = 500;
    let mut loose = 0.0;
    let mut tight = 0.0;
    for _ in 0..n {
        loose += TemporalEventTrapezium::builder(0.0, 100.0)
            .beginning_factor(2.5)
            .build(&mut rng)
            .unwrap()
            .beginning();
        tight += TemporalEventTrapezium::builder(0.0, 100.0)
            .beginning_factor(10.0)
            .build(&mut rng)
            .unwrap()
            .beginning();
    }
    assert!(tight / (n as f64) < loose / (n as f64));
}

#[test]
fn configured_attempt_budget_is_honoured() {
    let configuration = TrapeziumConfiguration::new(5.0, 5.0, 4.0, 3).unwrap();
    let result = TemporalEventTrapezium::builder(0.0, 100.0)
        .beginning(99.999_999)
        .configuration(configuration)
        .build(&mut StdRng::seed_from_u64(3));
    assert_eq!(result, Err(TemporalEventError::Sampling { attempts: 3 }));
}

#[test]
fn boundary_relations_of_separated_events() {
    let early = TemporalEventTrapezium::with_boundaries(0.0, 10.0, 2.0, 8.0).unwrap();
    let late = TemporalEventTrapezium::with_boundaries(20.0, 30.0, 22.0, 28.0).unwrap();
    let relations = early.boundary_relations(&late).unwrap();
    for r in [relations.beginning_beginning,
              relations.beginning_ending,
              relations.ending_beginning,
              relations.ending_ending] {
        assert_eq!(r.same(), 0.0);
        assert_eq!(r.before(), 1.0);
    }
    let reversed = late.boundary_relations(&early).unwrap();
    assert_eq!(reversed.ending_beginning.after(), 1.0);
}
