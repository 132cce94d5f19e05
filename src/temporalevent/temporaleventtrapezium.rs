use chrono::{
    DateTime,
    Utc
};
use rand::Rng;
use tracing::{
    debug,
    warn
};

use crate::configuration::TrapeziumConfiguration;
use crate::distribution::boundeddistribution::BoundedDistribution;
use crate::distribution::boundedstudentt::BoundedStudentT;
use crate::distribution::uniformdistribution::UniformDistribution;
use crate::temporalevent::relationformula::RelationFormula;
use crate::temporalevent::temporalevent::TemporalEvent;
use crate::temporalevent::temporaleventerror::TemporalEventError;
use crate::temporalevent::trapeziumrelationformula::RelationFormulaTrapezium;
use crate::time::unixtime::to_unix_time;

pub const TRAPEZIUM_BINS: usize = 4;

// ─────────────────────────────────────────────────────────────────────────────
// TemporalEventTrapezium
// ─────────────────────────────────────────────────────────────────────────────
//
//   a ──[distribution_beginning]── beginning ────── ending ──[distribution_ending]── b
//
// 兩個模糊邊界皆為均勻分布，建構後不可變。

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemporalEventTrapezium {
    a: f64,
    b: f64,
    beginning: f64,
    ending: f64,
    distribution_beginning: UniformDistribution,
    distribution_ending: UniformDistribution,
    relation_formula: RelationFormulaTrapezium
}

impl TemporalEventTrapezium {
    pub fn builder(a: f64, b: f64) -> TrapeziumBuilder {
        TrapeziumBuilder::new(a, b)
    }

    /// An event whose boundary points are known; no sampling happens.
    pub fn with_boundaries(a: f64,
                           b: f64,
                           beginning: f64,
                           ending: f64) -> Result<TemporalEventTrapezium, TemporalEventError> {
        if !(a.is_finite() && b.is_finite() && a < b) {
            return Err(TemporalEventError::InvalidInterval { a, b });
        }
        if !(a < beginning && beginning < ending && ending < b) {
            return Err(TemporalEventError::InvalidBoundaries { a, beginning, ending, b });
        }
        Ok(TemporalEventTrapezium {
            a,
            b,
            beginning,
            ending,
            distribution_beginning: UniformDistribution::from_bounds(a, beginning),
            distribution_ending: UniformDistribution::from_bounds(ending, b),
            relation_formula: RelationFormulaTrapezium::new()
        })
    }

    pub fn beginning(&self) -> f64 {
        self.beginning
    }

    pub fn ending(&self) -> f64 {
        self.ending
    }

    pub fn beginning_distribution(&self) -> &UniformDistribution {
        &self.distribution_beginning
    }

    pub fn ending_distribution(&self) -> &UniformDistribution {
        &self.distribution_ending
    }
}

impl TemporalEvent for TemporalEventTrapezium {
    fn a(&self) -> f64 {
        self.a
    }

    fn b(&self) -> f64 {
        self.b
    }

    fn distribution_beginning(&self) -> &dyn BoundedDistribution {
        &self.distribution_beginning
    }

    fn distribution_ending(&self) -> &dyn BoundedDistribution {
        &self.distribution_ending
    }

    fn relation_formula(&self) -> &dyn RelationFormula {
        &self.relation_formula
    }

    fn bins(&self) -> usize {
        TRAPEZIUM_BINS
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TrapeziumBuilder
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub struct TrapeziumBuilder {
    a: f64,
    b: f64,
    beginning: Option<f64>,
    ending: Option<f64>,
    beginning_factor: Option<f64>,
    ending_factor: Option<f64>,
    configuration: TrapeziumConfiguration
}

impl TrapeziumBuilder {
    pub fn new(a: f64, b: f64) -> TrapeziumBuilder {
        TrapeziumBuilder {
            a,
            b,
            beginning: None,
            ending: None,
            beginning_factor: None,
            ending_factor: None,
            configuration: TrapeziumConfiguration::default()
        }
    }

    pub fn from_datetimes(start: DateTime<Utc>, end: DateTime<Utc>) -> TrapeziumBuilder {
        TrapeziumBuilder::new(to_unix_time(start), to_unix_time(end))
    }

    pub fn beginning(mut self, beginning: f64) -> TrapeziumBuilder {
        self.beginning = Some(beginning);
        self
    }

    pub fn ending(mut self, ending: f64) -> TrapeziumBuilder {
        self.ending = Some(ending);
        self
    }

    pub fn beginning_factor(mut self, beginning_factor: f64) -> TrapeziumBuilder {
        self.beginning_factor = Some(beginning_factor);
        self
    }

    pub fn ending_factor(mut self, ending_factor: f64) -> TrapeziumBuilder {
        self.ending_factor = Some(ending_factor);
        self
    }

    pub fn configuration(mut self, configuration: TrapeziumConfiguration) -> TrapeziumBuilder {
        self.configuration = configuration;
        self
    }

    fn effective_factor(&self,
                        side: &str,
                        point: Option<f64>,
                        factor: Option<f64>,
                        default_factor: f64) -> Result<f64, TemporalEventError> {
        match (point, factor) {
            (Some(_), Some(_)) => Err(TemporalEventError::Configuration(
                format!("only one of '{side}' and '{side}_factor' may be given")
            )),
            (_, Some(f)) if !(f.is_finite() && f > 0.0) => Err(TemporalEventError::Configuration(
                format!("'{side}_factor' must be positive, got {f}")
            )),
            (_, Some(f)) => Ok(f),
            (_, None) => Ok(default_factor)
        }
    }

    /// Boundary prior for one side: a Student-t centered `width / factor`
    /// inside the interval, clipped to `[a, b]`.
    fn prior(&self, center: f64, scale: f64) -> Result<BoundedStudentT, TemporalEventError> {
        Ok(BoundedStudentT::new(self.configuration.degrees_of_freedom(), center, scale, self.a, self.b)?)
    }

    /// Builds the event, drawing any boundary point not given explicitly.
    ///
    /// Sampling repeats until `a < beginning < ending < b`, at most
    /// `max_attempts` times.
    pub fn build<R: Rng>(self, rng: &mut R) -> Result<TemporalEventTrapezium, TemporalEventError> {
        let (a, b) = (self.a, self.b);
        if !(a.is_finite() && b.is_finite() && a < b) {
            return Err(TemporalEventError::InvalidInterval { a, b });
        }
        self.configuration
            .validate()
            .map_err(|error| TemporalEventError::Configuration(error.to_string()))?;
        let beginning_factor = self.effective_factor(
            "beginning", self.beginning, self.beginning_factor, self.configuration.beginning_factor())?;
        let ending_factor = self.effective_factor(
            "ending", self.ending, self.ending_factor, self.configuration.ending_factor())?;

        if let (Some(beginning), Some(ending)) = (self.beginning, self.ending) {
            return TemporalEventTrapezium::with_boundaries(a, b, beginning, ending);
        }
        // 單側給定的點必須落在 (a, b) 內，否則抽樣永遠不會成功
        let outside = |point: Option<f64>| point.is_some_and(|p| !(a < p && p < b));
        if outside(self.beginning) || outside(self.ending) {
            return Err(TemporalEventError::InvalidBoundaries {
                a,
                beginning: self.beginning.unwrap_or(a),
                ending: self.ending.unwrap_or(b),
                b
            });
        }

        let width = b - a;
        let beginning_prior = match self.beginning {
            Some(_) => None,
            None => Some(self.prior(a + width / beginning_factor, width / beginning_factor)?)
        };
        let ending_prior = match self.ending {
            Some(_) => None,
            None => Some(self.prior(b - width / ending_factor, width / ending_factor)?)
        };

        let max_attempts = self.configuration.max_attempts();
        for attempt in 1..=max_attempts {
            let beginning = match &beginning_prior {
                Some(prior) => prior.sample(rng),
                None => self.beginning.unwrap_or(a)
            };
            let ending = match &ending_prior {
                Some(prior) => prior.sample(rng),
                None => self.ending.unwrap_or(b)
            };
            if a < beginning && beginning < ending && ending < b {
                debug!(a, b, beginning, ending, attempt, "sampled trapezium boundaries");
                return TemporalEventTrapezium::with_boundaries(a, b, beginning, ending);
            }
            debug!(beginning, ending, attempt, "rejected trapezium boundaries");
        }
        warn!(a, b, max_attempts, "trapezium boundary sampling exhausted its attempts");
        Err(TemporalEventError::Sampling { attempts: max_attempts })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn explicit_boundaries_skip_sampling() {
        let event = TemporalEventTrapezium::builder(0.0, 100.0)
            .beginning(10.0)
            .ending(90.0)
            .build(&mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(event.distribution_beginning().bounds(), (0.0, 10.0));
        assert_eq!(event.distribution_ending().bounds(), (90.0, 100.0));
        assert_eq!(event.bins(), 4);
    }

    #[test]
    fn explicit_boundaries_do_not_touch_generator() {
        let mut rng_1 = StdRng::seed_from_u64(5);
        let mut rng_2 = StdRng::seed_from_u64(5);
        let _ = TemporalEventTrapezium::builder(0.0, 100.0).beginning(10.0).ending(90.0).build(&mut rng_1);
        assert_eq!(rng_1.gen_range(0.0..1.0), rng_2.gen_range(0.0..1.0));
    }

    #[test]
    fn point_and_factor_on_same_side_is_configuration_error() {
        let result = TemporalEventTrapezium::builder(0.0, 100.0)
            .beginning(10.0)
            .beginning_factor(3.0)
            .build(&mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(TemporalEventError::Configuration(_))));

        let result = TemporalEventTrapezium::builder(0.0, 100.0)
            .ending(90.0)
            .ending_factor(3.0)
            .build(&mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(TemporalEventError::Configuration(_))));
    }

    #[test]
    fn non_positive_factor_is_configuration_error() {
        let result = TemporalEventTrapezium::builder(0.0, 100.0)
            .ending_factor(-1.0)
            .build(&mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(TemporalEventError::Configuration(_))));
    }

    #[test]
    fn reversed_interval_is_invalid() {
        let result = TemporalEventTrapezium::builder(100.0, 0.0).build(&mut StdRng::seed_from_u64(0));
        assert_eq!(result, Err(TemporalEventError::InvalidInterval { a: 100.0, b: 0.0 }));
        assert!(matches!(TemporalEventTrapezium::with_boundaries(1.0, 1.0, 1.0, 1.0),
                         Err(TemporalEventError::InvalidInterval { .. })));
    }

    #[test]
    fn misordered_explicit_boundaries_are_rejected() {
        assert!(matches!(TemporalEventTrapezium::with_boundaries(0.0, 100.0, 90.0, 10.0),
                         Err(TemporalEventError::InvalidBoundaries { .. })));
        assert!(matches!(TemporalEventTrapezium::with_boundaries(0.0, 100.0, 0.0, 10.0),
                         Err(TemporalEventError::InvalidBoundaries { .. })));
    }

    #[test]
    fn sampled_boundaries_are_ordered() {
        let mut rng = StdRng::seed_from_u64(2010);
        for _ in 0..1000 {
            let event = TemporalEventTrapezium::builder(0.0, 100.0).build(&mut rng).unwrap();
            assert!(0.0 < event.beginning());
            assert!(event.beginning() < event.ending());
            assert!(event.ending() < 100.0);
            assert_eq!(event.beginning_distribution().bounds(), (0.0, event.beginning()));
            assert_eq!(event.ending_distribution().bounds(), (event.ending(), 100.0));
        }
    }

    #[test]
    fn same_seed_gives_same_event() {
        let build = |seed| TemporalEventTrapezium::builder(-50.0, 50.0)
            .beginning_factor(3.0)
            .build(&mut StdRng::seed_from_u64(seed))
            .unwrap();
        assert_eq!(build(99), build(99));
    }

    #[test]
    fn one_explicit_side_keeps_its_point() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let event = TemporalEventTrapezium::builder(0.0, 100.0).ending(60.0).build(&mut rng).unwrap();
            assert_eq!(event.ending(), 60.0);
            assert!(0.0 < event.beginning() && event.beginning() < 60.0);
        }
    }

    #[test]
    fn single_point_outside_interval_fails_before_sampling() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut untouched = StdRng::seed_from_u64(12);
        let result = TemporalEventTrapezium::builder(0.0, 100.0).beginning(150.0).build(&mut rng);
        assert_eq!(result, Err(TemporalEventError::InvalidBoundaries {
            a: 0.0,
            beginning: 150.0,
            ending: 100.0,
            b: 100.0
        }));
        assert_eq!(rng.gen_range(0.0..1.0), untouched.gen_range(0.0..1.0));

        let result = TemporalEventTrapezium::builder(0.0, 100.0).ending(0.0).build(&mut rng);
        assert!(matches!(result, Err(TemporalEventError::InvalidBoundaries { .. })));
        let result = TemporalEventTrapezium::builder(0.0, 100.0).ending(f64::NAN).build(&mut rng);
        assert!(matches!(result, Err(TemporalEventError::InvalidBoundaries { .. })));
    }

    #[test]
    fn impossible_constraint_exhausts_attempts() {
        let configuration = TrapeziumConfiguration::default().with_max_attempts(50).unwrap();
        let result = TemporalEventTrapezium::builder(0.0, 100.0)
            .ending(1e-12)
            .configuration(configuration)
            .build(&mut StdRng::seed_from_u64(1));
        assert_eq!(result, Err(TemporalEventError::Sampling { attempts: 50 }));
    }

    #[test]
    fn datetimes_map_to_unix_seconds() {
        let start = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2010, 1, 2, 0, 0, 0).unwrap();
        let event = TrapeziumBuilder::from_datetimes(start, end)
            .build(&mut StdRng::seed_from_u64(4))
            .unwrap();
        assert_eq!(event.a(), 1_262_304_000.0);
        assert_eq!(event.b(), 1_262_390_400.0);
    }

    #[test]
    fn instance_falls_inside_fuzzy_boundaries() {
        let event = TemporalEventTrapezium::with_boundaries(0.0, 100.0, 10.0, 90.0).unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..100 {
            let (beginning, ending) = event.instance(&mut rng);
            assert!((0.0..=10.0).contains(&beginning));
            assert!((90.0..=100.0).contains(&ending));
        }
    }
}
