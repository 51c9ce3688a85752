//! The decision tree learner and the classifier it produces.

/// Defines the decision tree learner.
pub mod dtree;
/// Defines the classifier produced by [`DecisionTree`].
pub mod tree_classifier;
/// Defines split criteria and the per-attribute split search.
pub mod criterion;
/// Defines the inner node representation of the finished tree.
pub mod node;
/// Defines the split rule stored at branch nodes.
pub mod split_rule;

mod builder;


pub use builder::DecisionTreeBuilder;
pub use criterion::{ClassCounts, Criterion};
pub use dtree::DecisionTree;
pub use node::Node;
pub use split_rule::{LeftRight, Splitter};
pub use tree_classifier::DecisionTreeClassifier;
