use thiserror::Error;

use crate::math::function::function::{
    BoxedFunction,
    Function
};
use crate::math::function::interval::Interval;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PiecewiseFunctionError {
    #[error("interval {0} contains no point")]
    EmptyInterval(Interval),
    #[error("intervals {0} and {1} overlap")]
    OverlappingIntervals(Interval, Interval)
}

/// A function defined piece by piece over pairwise disjoint intervals.
///
/// Points outside every interval are evaluated by `default_function`.
pub struct CompositeFunction {
    pieces: Vec<(Interval, BoxedFunction)>,
    default_function: BoxedFunction
}

impl CompositeFunction {
    pub fn new(pieces: Vec<(Interval, BoxedFunction)>,
               default_function: BoxedFunction) -> Result<CompositeFunction, PiecewiseFunctionError> {
        for (i, (interval, _)) in pieces.iter().enumerate() {
            if interval.is_empty() {
                return Err(PiecewiseFunctionError::EmptyInterval(*interval));
            }
            for (other, _) in &pieces[(i + 1)..] {
                if interval.overlaps(other) {
                    return Err(PiecewiseFunctionError::OverlappingIntervals(*interval, *other));
                }
            }
        }
        Ok(CompositeFunction { pieces, default_function })
    }

    pub fn pieces(&self) -> usize {
        self.pieces.len()
    }
}

impl Function for CompositeFunction {
    fn value(&self, x: f64) -> f64 {
        // 區間互不重疊，至多一個區間包含 x
        self.pieces
            .iter()
            .find(|(interval, _)| interval.contains(x))
            .map_or_else(
                || self.default_function.value(x),
                |(_, function)| function.value(x)
            )
    }
}
