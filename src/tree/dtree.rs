//! Defines the decision tree learner.
use rand::Rng;
use rand::thread_rng;

use crate::errors::FloretError;
use crate::sample::{Attribute, Flower, Species};
use super::criterion::{ClassCounts, Criterion, SplitCandidate};
use super::node::Node;
use super::split_rule::Splitter;
use super::tree_classifier::DecisionTreeClassifier;

use std::cmp;
use std::ops;


/// Struct `Depth` defines the maximal depth of a tree.
/// This is just a wrapper for `usize`.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub(crate) struct Depth(usize);


impl From<usize> for Depth {
    fn from(depth: usize) -> Self {
        Self(depth)
    }
}


impl ops::Add<usize> for Depth {
    type Output = Self;
    #[inline]
    fn add(self, other: usize) -> Self::Output {
        Self(self.0 + other)
    }
}


impl cmp::PartialEq<usize> for Depth {
    #[inline]
    fn eq(&self, rhs: &usize) -> bool {
        self.0.eq(rhs)
    }
}


impl cmp::PartialOrd<usize> for Depth {
    #[inline]
    fn partial_cmp(&self, other: &usize) -> Option<cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}


/// Grows a [`DecisionTreeClassifier`] from a training partition.
/// `DecisionTree` keeps the growth parameters;
/// construct it via [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
pub struct DecisionTree {
    criterion:     Criterion,
    max_depth:     Depth,
    root_position: String,
}


impl DecisionTree {
    #[inline]
    pub(crate) fn from_components(
        criterion:     Criterion,
        max_depth:     Depth,
        root_position: String,
    ) -> Self
    {
        Self { criterion, max_depth, root_position, }
    }


    /// Grows a tree over `flowers`,
    /// drawing leaf tie-breaks from the thread-local generator
    /// so repeated runs are not correlated.
    /// Fails with [`FloretError::EmptyTrainingSet`] when `flowers`
    /// is empty.
    pub fn fit(&self, flowers: &[Flower])
        -> Result<DecisionTreeClassifier, FloretError>
    {
        self.fit_with_rng(flowers, &mut thread_rng())
    }


    /// Same as [`DecisionTree::fit`] with an injected random source,
    /// so tests can pin the leaf tie-breaks with a seeded generator.
    pub fn fit_with_rng<R: Rng>(&self, flowers: &[Flower], rng: &mut R)
        -> Result<DecisionTreeClassifier, FloretError>
    {
        if flowers.is_empty() {
            return Err(FloretError::EmptyTrainingSet);
        }

        // A non-empty root position label shifts the depth budget
        // by its length: depth is accounted as the label length.
        let max_depth = self.max_depth + self.root_position.len();

        let root = grow(
            flowers.to_vec(),
            self.root_position.clone(),
            max_depth,
            self.criterion,
            rng,
        );

        Ok(DecisionTreeClassifier::from(root))
    }
}


/// Recursively grows the subtree over `flowers` at `position`,
/// left child before right child.
fn grow<R: Rng>(
    flowers:   Vec<Flower>,
    position:  String,
    max_depth: Depth,
    criterion: Criterion,
    rng:       &mut R,
) -> Node
{
    let counts = ClassCounts::from_flowers(&flowers);

    if max_depth == position.len() || counts.is_pure() {
        let label = decide_label(&counts, rng);
        return Node::leaf(label, position, flowers);
    }

    // The best candidate over all attributes.
    // A later attribute replaces the incumbent only with strictly
    // greater gain, so the declared order breaks ties.
    let mut best: Option<SplitCandidate> = None;
    for attribute in Attribute::ALL {
        let Some(candidate) = criterion.best_split_on(attribute, &flowers)
            else { continue; };

        match best {
            Some(ref incumbent) if candidate.gain <= incumbent.gain => {},
            _ => { best = Some(candidate); },
        }
    }

    // Every attribute came back gainless:
    // nothing separates the remaining classes.
    let Some(candidate) = best else {
        let label = decide_label(&counts, rng);
        return Node::leaf(label, position, flowers);
    };

    // Commit the split at the remembered boundary of the
    // attribute-sorted partition. Splitting by index keeps the
    // left/right partition exact: no flower is lost or duplicated.
    let mut sorted = flowers;
    sorted.sort_by(|f, g| {
        f.value(candidate.attribute).total_cmp(&g.value(candidate.attribute))
    });

    let lflowers = sorted[..candidate.index].to_vec();
    let rflowers = sorted[candidate.index..].to_vec();

    let left = grow(
        lflowers, format!("{position}L"), max_depth, criterion, rng,
    );
    let right = grow(
        rflowers, format!("{position}R"), max_depth, criterion, rng,
    );

    let splitter = Splitter::new(candidate.attribute, candidate.threshold);
    Node::branch(splitter, position, sorted, Box::new(left), Box::new(right))
}


/// Decides the species a leaf commits to, given the class tallies
/// `(a, b, c)` of its partition:
///
/// * all three equal: a uniform draw among the three species;
/// * the two largest tie: a uniform draw between those two;
/// * the two smallest tie: the unique largest, deterministically;
/// * all distinct: the largest, deterministically.
///
/// Randomization applies only to ties at the top; a tie at the
/// bottom leaves a unique winner and stays deterministic.
pub(crate) fn decide_label<R: Rng>(counts: &ClassCounts, rng: &mut R)
    -> Species
{
    let [a, b, c] = counts.as_array();

    if a == b && b == c {
        Species::from_index(rng.gen_range(0..3))
    } else if a == b && b > c {
        Species::from_index(rng.gen_range(0..2))
    } else if b == c && c > a {
        Species::from_index(1 + rng.gen_range(0..2))
    } else if c == a && a > b {
        Species::from_index(2 * rng.gen_range(0..2))
    } else if a == b {
        Species::Virginica
    } else if b == c {
        Species::Setosa
    } else if c == a {
        Species::Versicolor
    } else if a > b && a > c {
        Species::Setosa
    } else if b > a && b > c {
        Species::Versicolor
    } else {
        Species::Virginica
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    const TRIALS: usize = 300;

    fn tally(counts: [usize; 3]) -> ClassCounts {
        let mut tally = ClassCounts::new();
        for (index, &count) in counts.iter().enumerate() {
            for _ in 0..count {
                tally.add(Species::from_index(index));
            }
        }
        tally
    }

    fn draw_many(counts: [usize; 3], seed: u64) -> [usize; 3] {
        let tally = tally(counts);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut chosen = [0usize; 3];
        for _ in 0..TRIALS {
            chosen[decide_label(&tally, &mut rng).as_index()] += 1;
        }
        chosen
    }


    #[test]
    fn three_way_tie_draws_every_species() {
        let chosen = draw_many([5, 5, 5], 0);
        for count in chosen {
            // Expectation is TRIALS / 3; a wide band keeps this stable.
            assert!(count > TRIALS / 6 && count < TRIALS / 2);
        }
    }


    #[test]
    fn top_two_tie_draws_only_the_tied_species() {
        let chosen = draw_many([5, 5, 1], 1);
        assert!(chosen[0] > 0);
        assert!(chosen[1] > 0);
        assert_eq!(chosen[2], 0);

        let chosen = draw_many([1, 5, 5], 2);
        assert_eq!(chosen[0], 0);
        assert!(chosen[1] > 0);
        assert!(chosen[2] > 0);

        let chosen = draw_many([5, 1, 5], 3);
        assert!(chosen[0] > 0);
        assert_eq!(chosen[1], 0);
        assert!(chosen[2] > 0);
    }


    #[test]
    fn bottom_two_tie_is_deterministic() {
        assert_eq!(draw_many([5, 1, 1], 4), [TRIALS, 0, 0]);
        assert_eq!(draw_many([1, 5, 1], 5), [0, TRIALS, 0]);
        assert_eq!(draw_many([1, 1, 5], 6), [0, 0, TRIALS]);
    }


    #[test]
    fn distinct_counts_pick_the_majority() {
        assert_eq!(draw_many([3, 2, 1], 7), [TRIALS, 0, 0]);
        assert_eq!(draw_many([1, 3, 2], 8), [0, TRIALS, 0]);
        assert_eq!(draw_many([2, 1, 3], 9), [0, 0, TRIALS]);
    }
}
