//! Defines the flower record ([`Flower`]),
//! its closed attribute/species sets,
//! and a reader for the line-oriented CSV input format.

mod flower;
/// Reads flower records from CSV lines.
pub mod reader;

pub use flower::{
    Attribute,
    Flower,
    Species,
};
