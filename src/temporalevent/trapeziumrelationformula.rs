use crate::distribution::boundeddistribution::BoundedDistribution;
use crate::math::function::compositefunction::CompositeFunction;
use crate::math::function::constantfunction::{
    FUNCTION_ONE,
    FUNCTION_ZERO
};
use crate::math::function::function::{
    BoxedFunction,
    Function
};
use crate::math::function::interval::Interval;
use crate::math::function::linearfunction::LinearFunction;
use crate::temporalevent::relationformula::RelationFormula;
use crate::temporalevent::relationprobabilities::RelationProbabilities;
use crate::temporalevent::temporaleventerror::TemporalEventError;

// ─────────────────────────────────────────────────────────────────────────────
// RelationFormulaTrapezium
// ─────────────────────────────────────────────────────────────────────────────
//
// 兩個分布皆視為在其 support 上均勻分布（u_i = 1 / d_i），不論實際形狀。
//
//   same  = sqrt(u_1 · u_2) · |[max(a_1, a_2), min(b_1, b_2)]|
//   after = P(mean_1 - mean_2) · (1 - same)
//   before = 1 - same - after
//
// 其中 l = |d_1 - d_2|，P 為：
//
//   [l/2, +inf)    → 1
//   (-l/2, l/2)    → 由 (-l/2, 0) 線性升至 (l/2, 1)，僅當 l > 0
//   其餘           → 0

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelationFormulaTrapezium;

impl RelationFormulaTrapezium {
    pub fn new() -> RelationFormulaTrapezium {
        RelationFormulaTrapezium
    }

    /// The proportion function for a duration asymmetry `l`.
    pub fn proportion_function(l: f64) -> Result<CompositeFunction, TemporalEventError> {
        let half = l / 2.0;
        let mut pieces: Vec<(Interval, BoxedFunction)> = vec![
            (Interval::at_least(half), Box::new(FUNCTION_ONE) as BoxedFunction)
        ];
        if half > 0.0 {
            pieces.push((Interval::open(-half, half), Box::new(LinearFunction::new(-half, 0.0, half, 1.0)) as BoxedFunction));
        }
        Ok(CompositeFunction::new(pieces, Box::new(FUNCTION_ZERO))?)
    }
}

impl RelationFormula for RelationFormulaTrapezium {
    fn compare(&self,
               dist_1: &dyn BoundedDistribution,
               dist_2: &dyn BoundedDistribution) -> Result<RelationProbabilities, TemporalEventError> {
        let dist_1_duration = self.duration_of(dist_1)?;
        let dist_2_duration = self.duration_of(dist_2)?;
        let (a_1, b_1) = self.bounds_of(dist_1);
        let (a_2, b_2) = self.bounds_of(dist_2);

        let same_a = a_1.max(a_2);
        let same_b = b_1.min(b_2);

        // sqrt(u_1 · u_2) · width，拆成兩個不大於 1 的比值相乘，避免 d_1 · d_2 underflow
        let same = if same_a < same_b {
            let width = same_b - same_a;
            (width / dist_1_duration).sqrt() * (width / dist_2_duration).sqrt()
        } else {
            0.0
        };

        let l = (dist_1_duration - dist_2_duration).abs();
        let proportion_function = Self::proportion_function(l)?;

        let non_same_portion = 1.0 - same;
        let after = proportion_function.value(dist_1.mean() - dist_2.mean()) * non_same_portion;
        Ok(RelationProbabilities::new(non_same_portion - after, same, after))
    }
}
