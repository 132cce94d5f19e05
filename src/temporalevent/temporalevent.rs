use rand::RngCore;
use serde::{
    Deserialize,
    Serialize
};

use crate::distribution::boundeddistribution::BoundedDistribution;
use crate::temporalevent::relationformula::RelationFormula;
use crate::temporalevent::relationprobabilities::RelationProbabilities;
use crate::temporalevent::temporaleventerror::TemporalEventError;

/// Comparisons of every boundary of one event against every boundary of
/// another, named `<self boundary>_<other boundary>`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundaryRelations {
    pub beginning_beginning: RelationProbabilities,
    pub beginning_ending: RelationProbabilities,
    pub ending_beginning: RelationProbabilities,
    pub ending_ending: RelationProbabilities
}

/// What an uncertain event exposes to whatever aggregates boundary
/// comparisons into interval relations.
pub trait TemporalEvent: Send + Sync {
    fn a(&self) -> f64;

    fn b(&self) -> f64;

    fn distribution_beginning(&self) -> &dyn BoundedDistribution;

    fn distribution_ending(&self) -> &dyn BoundedDistribution;

    fn relation_formula(&self) -> &dyn RelationFormula;

    fn bins(&self) -> usize;

    /// A crisp `(beginning, ending)` drawn from the two boundary distributions.
    fn instance(&self, rng: &mut dyn RngCore) -> (f64, f64) {
        let beginning = self.distribution_beginning().sample(rng);
        let ending = self.distribution_ending().sample(rng);
        (beginning, ending)
    }

    fn boundary_relations(&self, other: &dyn TemporalEvent) -> Result<BoundaryRelations, TemporalEventError> {
        let formula = self.relation_formula();
        Ok(BoundaryRelations {
            beginning_beginning: formula.compare(self.distribution_beginning(), other.distribution_beginning())?,
            beginning_ending: formula.compare(self.distribution_beginning(), other.distribution_ending())?,
            ending_beginning: formula.compare(self.distribution_ending(), other.distribution_beginning())?,
            ending_ending: formula.compare(self.distribution_ending(), other.distribution_ending())?
        })
    }
}
