use rand::RngCore;
use rand_distr::{
    Distribution,
    StudentT
};
use statrs::distribution::{
    ContinuousCDF,
    StudentsT
};

use crate::distribution::boundeddistribution::BoundedDistribution;
use crate::distribution::distributionerror::DistributionError;

// ─────────────────────────────────────────────────────────────────────────────
// BoundedStudentT
// ─────────────────────────────────────────────────────────────────────────────
//
// Location-scale Student-t，抽樣後截斷（clip）至 [lower, upper]：
//
//   X = clamp(location + scale · T_ν, lower, upper)
//
// 截斷會把尾端機率質量堆在兩個端點上，因此期望值為
//
//   E[X] = lower + ∫_lower^upper (1 - F(x)) dx
//
// 以 composite Simpson 法數值積分。

const SIMPSON_PANELS: usize = 512;

#[derive(Debug, Clone)]
pub struct BoundedStudentT {
    location: f64,
    scale: f64,
    lower: f64,
    upper: f64,
    sampler: StudentT<f64>,
    cdf: StudentsT
}

impl BoundedStudentT {
    pub fn new(degrees_of_freedom: f64,
               location: f64,
               scale: f64,
               lower: f64,
               upper: f64) -> Result<BoundedStudentT, DistributionError> {
        if !(degrees_of_freedom.is_finite() && degrees_of_freedom > 0.0) {
            return Err(DistributionError::InvalidDegreesOfFreedom(degrees_of_freedom));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(DistributionError::InvalidScale(scale));
        }
        if !location.is_finite() {
            return Err(DistributionError::InvalidLocation(location));
        }
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(DistributionError::InvalidSupport { lower, upper });
        }
        let sampler = StudentT::new(degrees_of_freedom)
            .map_err(|_| DistributionError::InvalidDegreesOfFreedom(degrees_of_freedom))?;
        let cdf = StudentsT::new(location, scale, degrees_of_freedom)
            .map_err(|_| DistributionError::InvalidScale(scale))?;
        Ok(BoundedStudentT { location, scale, lower, upper, sampler, cdf })
    }

    /// Distribution function of the clipped variable.
    pub fn cdf(&self, x: f64) -> f64 {
        if x < self.lower {
            0.0
        } else if x >= self.upper {
            1.0
        } else {
            self.cdf.cdf(x)
        }
    }
}

impl BoundedDistribution for BoundedStudentT {
    fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    fn mean(&self) -> f64 {
        let h = (self.upper - self.lower) / SIMPSON_PANELS as f64;
        let survival = |x: f64| 1.0 - self.cdf.cdf(x);
        let mut sum = survival(self.lower) + survival(self.upper);
        for i in 1..SIMPSON_PANELS {
            let x = self.lower + h * i as f64;
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            sum += weight * survival(x);
        }
        self.lower + sum * h / 3.0
    }

    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        let t: f64 = self.sampler.sample(rng);
        f64::mul_add(self.scale, t, self.location).clamp(self.lower, self.upper)
    }
}
