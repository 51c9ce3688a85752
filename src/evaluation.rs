//! Holdout evaluation:
//! splitting a sample into training and validation partitions
//! and counting classification accuracy over each.
use rayon::prelude::*;

use crate::classifier::Classifier;
use crate::errors::FloretError;
use crate::sample::Flower;

use std::fmt;


/// Splits `flowers` into a training/validation pair.
/// The validation partition is the contiguous slice `[begin, end)`;
/// the training partition is the remainder with its order preserved.
/// An inverted or out-of-bounds range fails with
/// [`FloretError::InvalidRange`].
pub fn holdout(flowers: &[Flower], begin: usize, end: usize)
    -> Result<(Vec<Flower>, Vec<Flower>), FloretError>
{
    if begin > end || end > flowers.len() {
        return Err(FloretError::InvalidRange {
            begin, end, len: flowers.len(),
        });
    }

    let validation = flowers[begin..end].to_vec();
    let mut training = flowers[..begin].to_vec();
    training.extend_from_slice(&flowers[end..]);

    Ok((training, validation))
}


/// The counted outcome of classifying a set of flowers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accuracy {
    correct: usize,
    total:   usize,
}


impl Accuracy {
    /// The number of correctly classified flowers.
    #[inline]
    pub fn correct(&self) -> usize {
        self.correct
    }


    /// The number of classified flowers.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }


    /// The fraction of correctly classified flowers.
    /// An empty set counts as accuracy `0`.
    #[inline]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}


impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}


/// Counts how many flowers the classifier assigns
/// to their labeled species.
/// Classification of the batch runs in parallel;
/// each prediction is a read-only tree walk.
pub fn accuracy<C>(classifier: &C, flowers: &[Flower]) -> Accuracy
    where C: Classifier + Sync,
{
    let correct = flowers.par_iter()
        .filter(|flower| classifier.predict(flower) == flower.species())
        .count();

    Accuracy { correct, total: flowers.len(), }
}
