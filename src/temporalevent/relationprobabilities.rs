use serde::{
    Deserialize,
    Serialize
};

/// Probability mass of "before", "same" and "after" between two fuzzy time
/// points. The three components sum to one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelationProbabilities {
    before: f64,
    same: f64,
    after: f64
}

impl RelationProbabilities {
    pub fn new(before: f64, same: f64, after: f64) -> RelationProbabilities {
        RelationProbabilities { before, same, after }
    }

    pub fn before(&self) -> f64 {
        self.before
    }

    pub fn same(&self) -> f64 {
        self.same
    }

    pub fn after(&self) -> f64 {
        self.after
    }

    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.before, self.same, self.after)
    }

    /// The same relation seen from the other operand.
    pub fn inverse(&self) -> RelationProbabilities {
        RelationProbabilities::new(self.after, self.same, self.before)
    }
}

impl From<RelationProbabilities> for (f64, f64, f64) {
    fn from(value: RelationProbabilities) -> Self {
        value.as_tuple()
    }
}
