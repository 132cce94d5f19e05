use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DistributionError {
    #[error("degrees of freedom must be positive and finite, got {0}")]
    InvalidDegreesOfFreedom(f64),
    #[error("scale must be positive and finite, got {0}")]
    InvalidScale(f64),
    #[error("location must be finite, got {0}")]
    InvalidLocation(f64),
    #[error("support [{lower}, {upper}] is not a finite non-empty range")]
    InvalidSupport { lower: f64, upper: f64 }
}
