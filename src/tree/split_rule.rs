//! This file defines the split rule stored at branch nodes.
use serde::{Serialize, Deserialize};

use crate::sample::{Attribute, Flower};


/// The output of [`Splitter::split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    /// The flower goes to the left child.
    Left,
    /// The flower goes to the right child.
    Right,
}


/// A split rule:
/// flowers whose attribute value is strictly below the threshold
/// go left, all others go right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    pub(crate) attribute: Attribute,
    pub(crate) threshold: f64,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(attribute: Attribute, threshold: f64) -> Self {
        Self { attribute, threshold, }
    }


    /// The attribute this rule tests.
    #[inline]
    pub fn attribute(&self) -> Attribute {
        self.attribute
    }


    /// The threshold this rule compares against.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// Defines the splitting.
    #[inline]
    pub fn split(&self, flower: &Flower) -> LeftRight {
        if flower.value(self.attribute) < self.threshold {
            LeftRight::Left
        } else {
            LeftRight::Right
        }
    }
}
