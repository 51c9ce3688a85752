//! Builder for the decision tree learner.
use super::criterion::Criterion;
use super::dtree::{DecisionTree, Depth};


/// The maximal depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 2;


/// A struct that builds [`DecisionTree`].
/// `DecisionTreeBuilder` keeps the parameters for growing a tree.
///
/// # Example
///
/// ```no_run
/// use floret::{Criterion, DecisionTreeBuilder};
///
/// let tree = DecisionTreeBuilder::new()
///     .max_depth(3)
///     .criterion(Criterion::Entropy)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder {
    max_depth:     Depth,
    criterion:     Criterion,
    root_position: String,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, the parameters are set as follows;
    /// ```text
    /// max_depth:     DEFAULT_MAX_DEPTH == 2,
    /// criterion:     Criterion::Entropy,
    /// root_position: "" (the tree is grown from the true root),
    /// ```
    pub fn new() -> Self {
        Self {
            max_depth:     Depth::from(DEFAULT_MAX_DEPTH),
            criterion:     Criterion::Entropy,
            root_position: String::new(),
        }
    }


    /// Specify the maximal depth of the tree,
    /// counted in edges from the root.
    /// Depth `0` makes the root itself a leaf.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Depth::from(depth);
        self
    }


    /// Set the node splitting rule.
    /// Default value is `Criterion::Entropy`.
    /// See [`Criterion`] for other rules.
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Label the root with a left/right path
    /// (conventionally a string over `L` and `R`),
    /// as if the tree were grown as a subtree at that path.
    /// A non-empty label extends the effective depth budget
    /// by its length, since depth is accounted as label length.
    pub fn root_position<S: ToString>(mut self, position: S) -> Self {
        self.root_position = position.to_string();
        self
    }


    /// Build a [`DecisionTree`].
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::from_components(
            self.criterion, self.max_depth, self.root_position,
        )
    }
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
