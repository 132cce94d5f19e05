use thiserror::Error;

use crate::distribution::distributionerror::DistributionError;
use crate::math::function::compositefunction::PiecewiseFunctionError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TemporalEventError {
    #[error("'b' should be greater than 'a' (a = {a}, b = {b})")]
    InvalidInterval { a: f64, b: f64 },
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("distribution over [{lower}, {upper}] has non-positive duration")]
    DegenerateDistribution { lower: f64, upper: f64 },
    #[error("no boundaries satisfying a < beginning < ending < b after {attempts} attempts")]
    Sampling { attempts: usize },
    #[error("boundaries violate {a} < {beginning} < {ending} < {b}")]
    InvalidBoundaries { a: f64, beginning: f64, ending: f64, b: f64 },
    #[error(transparent)]
    Distribution(#[from] DistributionError),
    #[error(transparent)]
    PiecewiseFunction(#[from] PiecewiseFunctionError)
}
