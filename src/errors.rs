//! Errors
//!
//! Custom error types used throughout the `floret` crate.
use thiserror::Error;

/// Errors that can occur while reading flowers or growing a tree.
#[derive(Debug, Error)]
pub enum FloretError {
    /// The training partition holds no flowers,
    /// so there is no class distribution to split on.
    #[error("The training partition is empty; cannot grow a tree.")]
    EmptyTrainingSet,
    /// The requested validation range does not fit the sample.
    #[error("Invalid validation range [{begin}, {end}) for {len} flowers.")]
    InvalidRange {
        /// First index of the validation slice.
        begin: usize,
        /// One past the last index of the validation slice.
        end: usize,
        /// Number of flowers in the full sample.
        len: usize,
    },
    /// A record does not consist of exactly five comma-separated fields.
    #[error("Expected 5 comma-separated fields but found {0} in record `{1}`.")]
    WrongFieldCount(usize, String),
    /// A measurement field could not be parsed as a number.
    #[error("Invalid value `{0}` for {1}, expected a floating point number.")]
    InvalidFieldValue(String, String),
    /// The class code is not one of `0`, `1`, or `2`.
    #[error("Invalid class code `{0}`, expected one of 0, 1, 2.")]
    InvalidClassCode(String),
    /// Unable to read the input records.
    #[error("Failed to read flowers: {0}")]
    Io(#[from] std::io::Error),
}
