//! Split criteria and the per-attribute split search.
use serde::{Serialize, Deserialize};

use crate::sample::{Attribute, Flower, Species};

use std::fmt;


/// Per-species tallies of a (partial) flower partition.
/// Supports incremental updates so the split search can slide
/// flowers from the right side to the left in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassCounts {
    counts: [usize; Species::COUNT],
}


impl ClassCounts {
    /// An empty tally.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Tallies a whole partition.
    #[inline]
    pub fn from_flowers(flowers: &[Flower]) -> Self {
        let mut counts = Self::new();
        for flower in flowers {
            counts.add(flower.species());
        }
        counts
    }


    #[inline]
    pub(crate) fn add(&mut self, species: Species) {
        self.counts[species.as_index()] += 1;
    }


    #[inline]
    pub(crate) fn remove(&mut self, species: Species) {
        self.counts[species.as_index()] -= 1;
    }


    /// The number of flowers of the given species.
    #[inline]
    pub fn count(&self, species: Species) -> usize {
        self.counts[species.as_index()]
    }


    /// The total number of flowers tallied.
    #[inline]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }


    /// At most one species is represented.
    #[inline]
    pub fn is_pure(&self) -> bool {
        self.counts.iter().filter(|&&count| count > 0).count() <= 1
    }


    #[inline]
    pub(crate) fn as_array(&self) -> [usize; Species::COUNT] {
        self.counts
    }
}


/// Splitting criteria for growing the decision tree.
/// * `Criterion::Entropy` measures impurity with the entropy function.
/// * `Criterion::Gini` measures impurity with the Gini index.
///
/// Either way, the gain of a candidate split is the parent impurity
/// minus the size-weighted impurities of the two sides,
/// which is non-negative and zero exactly when the split leaves the
/// class proportions unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    /// Entropy with the convention `0 log2(0) == 0`.
    Entropy,
    /// Gini index.
    Gini,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entropy => "Entropy",
            Self::Gini    => "Gini index",
        };

        write!(f, "{name}")
    }
}


/// The best split found on a single attribute.
/// `index` is the boundary in the attribute-sorted partition:
/// the left side is `sorted[..index]`, the right side `sorted[index..]`,
/// and `threshold` is the midpoint of the two adjacent values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SplitCandidate {
    pub(crate) attribute: Attribute,
    pub(crate) index:     usize,
    pub(crate) threshold: f64,
    pub(crate) gain:      f64,
}


impl Criterion {
    /// The impurity of the class distribution in `counts`.
    /// An empty tally has impurity zero.
    #[inline]
    pub fn impurity(self, counts: &ClassCounts) -> f64 {
        let total = counts.total();
        if total == 0 { return 0.0; }
        let total = total as f64;

        match self {
            Self::Entropy => {
                counts.as_array()
                    .into_iter()
                    .map(|count| {
                        let r = count as f64 / total;
                        if r <= 0.0 { 0.0 } else { -r * r.log2() }
                    })
                    .sum::<f64>()
            },
            Self::Gini => {
                let correct = counts.as_array()
                    .into_iter()
                    .map(|count| (count as f64 / total).powi(2))
                    .sum::<f64>();

                (1.0 - correct).max(0.0)
            },
        }
    }


    /// The impurity reduction achieved by splitting a partition
    /// with impurity `parent_impurity` into `left` and `right`.
    #[inline]
    fn gain(
        self,
        parent_impurity: f64,
        left: &ClassCounts,
        right: &ClassCounts,
    ) -> f64
    {
        let l = left.total() as f64;
        let r = right.total() as f64;
        let total = l + r;

        parent_impurity
            - (l / total) * self.impurity(left)
            - (r / total) * self.impurity(right)
    }


    /// Searches the best split of `flowers` on `attribute`.
    ///
    /// The partition is sorted by the attribute value and every boundary
    /// where the value changes is a candidate; boundaries between equal
    /// values are never candidates, so both sides of every candidate are
    /// non-empty. The first candidate achieving the strictly greatest
    /// gain wins. Returns `None` when no candidate has positive gain.
    pub(crate) fn best_split_on(
        self,
        attribute: Attribute,
        flowers: &[Flower],
    ) -> Option<SplitCandidate>
    {
        let n_flowers = flowers.len();
        if n_flowers < 2 { return None; }

        let mut sorted = flowers.to_vec();
        sorted.sort_by(|f, g| {
            f.value(attribute).total_cmp(&g.value(attribute))
        });

        let parent = ClassCounts::from_flowers(&sorted);
        let parent_impurity = self.impurity(&parent);

        let mut left = ClassCounts::new();
        let mut right = parent;
        let mut best: Option<SplitCandidate> = None;

        for boundary in 1..n_flowers {
            let moved = sorted[boundary - 1];
            left.add(moved.species());
            right.remove(moved.species());

            let below = moved.value(attribute);
            let above = sorted[boundary].value(attribute);
            if below == above { continue; }

            let gain = self.gain(parent_impurity, &left, &right);
            if gain <= 0.0 { continue; }

            match best {
                Some(ref incumbent) if gain <= incumbent.gain => {},
                _ => {
                    best = Some(SplitCandidate {
                        attribute,
                        index: boundary,
                        threshold: (below + above) / 2.0,
                        gain,
                    });
                },
            }
        }

        best
    }
}
