//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use crate::classifier::Classifier;
use crate::sample::{Flower, Species};
use super::node::Node;

use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;


/// Decision tree classifier.
/// This struct is just a wrapper of [`Node`];
/// it is read-only once grown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTreeClassifier {
    #[inline]
    fn predict(&self, flower: &Flower) -> Species {
        self.root.predict(flower)
    }
}


impl DecisionTreeClassifier {
    /// The root node, for structural inspection of the tree.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Write the current decision tree to a dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
