//! The inner node representation of a finished decision tree.
use serde::{Serialize, Deserialize};

use crate::classifier::Classifier;
use crate::sample::{Flower, Species};
use super::split_rule::{LeftRight, Splitter};

use std::fmt;


/// A finished tree node.
/// A node is either a branch with exactly two children
/// or a leaf committed to one species, never both.
/// Every node retains the flower partition it was grown from
/// together with its position label,
/// so callers can reproduce a full diagnostic dump of the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// An internal node holding a split rule and two children.
    Branch {
        /// The committed split rule.
        splitter: Splitter,
        /// The left/right path from the root to this node.
        position: String,
        /// The flower partition this node was grown from.
        flowers:  Vec<Flower>,
        /// Child for flowers below the threshold.
        left:     Box<Node>,
        /// Child for flowers at or above the threshold.
        right:    Box<Node>,
    },
    /// A terminal node committed to one species.
    Leaf {
        /// The decided species.
        label:    Species,
        /// The left/right path from the root to this node.
        position: String,
        /// The flower partition this node was grown from.
        flowers:  Vec<Flower>,
    },
}


impl Node {
    pub(crate) fn branch(
        splitter: Splitter,
        position: String,
        flowers:  Vec<Flower>,
        left:     Box<Node>,
        right:    Box<Node>,
    ) -> Self
    {
        Self::Branch {
            splitter,
            position,
            flowers,
            left,
            right,
        }
    }


    pub(crate) fn leaf(
        label:    Species,
        position: String,
        flowers:  Vec<Flower>,
    ) -> Self
    {
        Self::Leaf { label, position, flowers, }
    }


    /// The left/right path from the root to this node.
    /// The root of a tree grown without a position label
    /// has the empty path.
    #[inline]
    pub fn position(&self) -> &str {
        match self {
            Self::Branch { position, .. } => position,
            Self::Leaf   { position, .. } => position,
        }
    }


    /// The flower partition this node was grown from.
    #[inline]
    pub fn flowers(&self) -> &[Flower] {
        match self {
            Self::Branch { flowers, .. } => flowers,
            Self::Leaf   { flowers, .. } => flowers,
        }
    }


    /// `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Visits this node and every descendant in pre-order,
    /// left child before right child.
    pub fn visit<F>(&self, f: &mut F)
        where F: FnMut(&Node),
    {
        f(self);
        if let Self::Branch { left, right, .. } = self {
            left.visit(f);
            right.visit(f);
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch { splitter, left, right, .. } => {
                let branch = format!(
                    "\tnode_{id} [ label = \"{feat} < {thr:.2} ?\" ];\n",
                    feat = splitter.attribute,
                    thr  = splitter.threshold,
                );

                let left_id = id + 1;
                let (     left,  right_id) = left.to_dot_info(left_id);
                let (mut right, return_id) = right.to_dot_info(right_id);

                let mut info = left;
                info.push(branch);
                info.append(&mut right);

                let left_edge = format!(
                    "\tnode_{id} -- node_{left_id} [ label = \"Yes\" ];\n",
                );
                info.push(left_edge);
                let right_edge = format!(
                    "\tnode_{id} -- node_{right_id} [ label = \"No\" ];\n",
                );
                info.push(right_edge);

                (info, return_id)
            },
            Self::Leaf { label, .. } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


impl Classifier for Node {
    #[inline]
    fn predict(&self, flower: &Flower) -> Species {
        match self {
            Self::Branch { splitter, left, right, .. } => {
                match splitter.split(flower) {
                    LeftRight::Left  => left.predict(flower),
                    LeftRight::Right => right.predict(flower),
                }
            },
            Self::Leaf { label, .. } => *label,
        }
    }
}


impl fmt::Display for Node {
    /// Renders this node and its subtree, one block per node:
    /// the split rule or decided label, the position,
    /// and every flower of the partition.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = match self.position() {
            ""       => "Root",
            position => position,
        };

        match self {
            Self::Branch { splitter, flowers, left, right, .. } => {
                writeln!(
                    f,
                    "[{position}] {feat} < {thr:.2} ?",
                    feat = splitter.attribute,
                    thr  = splitter.threshold,
                )?;
                for flower in flowers {
                    writeln!(f, "    {flower}")?;
                }
                write!(f, "{left}")?;
                write!(f, "{right}")
            },
            Self::Leaf { label, flowers, .. } => {
                writeln!(f, "[{position}] -> {label}")?;
                for flower in flowers {
                    writeln!(f, "    {flower}")?;
                }
                Ok(())
            },
        }
    }
}
