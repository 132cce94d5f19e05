use crate::distribution::boundeddistribution::BoundedDistribution;
use crate::temporalevent::relationprobabilities::RelationProbabilities;
use crate::temporalevent::temporaleventerror::TemporalEventError;

/// Strategy that compares two fuzzy time points.
///
/// Implementations are stateless, so one instance may be shared between
/// events and threads.
pub trait RelationFormula: Send + Sync {
    fn compare(&self,
               dist_1: &dyn BoundedDistribution,
               dist_2: &dyn BoundedDistribution) -> Result<RelationProbabilities, TemporalEventError>;

    fn bounds_of(&self, dist: &dyn BoundedDistribution) -> (f64, f64) {
        dist.bounds()
    }

    /// Duration of the support, rejecting anything that is not strictly
    /// positive and finite.
    fn duration_of(&self, dist: &dyn BoundedDistribution) -> Result<f64, TemporalEventError> {
        let duration = dist.duration();
        if duration.is_finite() && duration > 0.0 {
            Ok(duration)
        } else {
            let (lower, upper) = dist.bounds();
            Err(TemporalEventError::DegenerateDistribution { lower, upper })
        }
    }
}
