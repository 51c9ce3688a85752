//! The core trait for hypotheses that assign a species to a flower.
use crate::sample::{Flower, Species};


/// A trait for classifiers over flowers.
/// A classifier is a total function:
/// it always commits to one of the three species.
pub trait Classifier {
    /// Predicts the species of the given flower.
    fn predict(&self, flower: &Flower) -> Species;


    /// Predicts the species of every flower in the slice.
    fn predict_all(&self, flowers: &[Flower]) -> Vec<Species> {
        flowers.iter()
            .map(|flower| self.predict(flower))
            .collect()
    }
}
