use rand::{
    Rng,
    RngCore
};
use serde::{
    Deserialize,
    Serialize
};

use crate::distribution::boundeddistribution::BoundedDistribution;

/// Uniform distribution over `[loc, loc + scale]`.
///
/// Construction does not reject `scale <= 0`; a degenerate uniform is
/// reported by whichever consumer needs a positive duration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformDistribution {
    lower: f64,
    upper: f64
}

impl UniformDistribution {
    pub fn new(loc: f64, scale: f64) -> UniformDistribution {
        UniformDistribution { lower: loc, upper: loc + scale }
    }

    /// Keeps both ends exactly as given.
    pub fn from_bounds(lower: f64, upper: f64) -> UniformDistribution {
        UniformDistribution { lower, upper }
    }

    pub fn scale(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn density(&self, x: f64) -> f64 {
        let scale = self.scale();
        if scale > 0.0 && x >= self.lower && x <= self.upper {
            1.0 / scale
        } else {
            0.0
        }
    }
}

impl BoundedDistribution for UniformDistribution {
    fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    fn mean(&self) -> f64 {
        self.lower + self.scale() / 2.0
    }

    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        if self.lower < self.upper {
            rng.gen_range(self.lower..=self.upper)
        } else {
            self.lower
        }
    }
}
