#![warn(missing_docs)]

//!
//! Floret grows a binary decision tree over iris flower measurements
//! and classifies flowers into one of three species.
//!
//! Training follows the classic top-down induction scheme:
//! at every node the learner searches, per attribute, for the threshold
//! that maximizes information gain, commits the best split,
//! and recurses into the two children until the partition is pure,
//! the depth budget is spent, or no split separates the classes anymore.
//! Ties in the leaf majority vote are broken by a random draw,
//! so the learner accepts any [`rand::Rng`] for reproducible tests.
//!
//! ```
//! use floret::{Classifier, DecisionTreeBuilder, Flower, Species};
//!
//! let flowers = vec![
//!     Flower::new(4.9, 3.0, 1.4, 0.2, Species::Setosa),
//!     Flower::new(6.4, 3.2, 4.5, 1.5, Species::Versicolor),
//!     Flower::new(5.9, 3.0, 5.1, 1.8, Species::Virginica),
//! ];
//!
//! let tree = DecisionTreeBuilder::new()
//!     .max_depth(2)
//!     .build();
//! let f = tree.fit(&flowers).unwrap();
//!
//! assert_eq!(f.predict(&flowers[0]), Species::Setosa);
//! ```

pub mod classifier;
pub mod errors;
pub mod evaluation;
pub mod sample;
pub mod tree;


pub use classifier::Classifier;
pub use errors::FloretError;
pub use evaluation::{
    accuracy,
    holdout,
    Accuracy,
};
pub use sample::{
    Attribute,
    Flower,
    Species,
};
pub use tree::{
    Criterion,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
};
