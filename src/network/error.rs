//! The error types for network construction, transformation, and statistics.

use std::{error, fmt};

/// The reason why a network operation's preconditions were violated.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The topology is empty: a network needs at least one layer.
    EmptyTopology,
    /// The weight range is invalid. Contains the requested minimum and maximum.
    InvalidWeightRange(f64, f64),
    /// The number of input values differs from the size of the input layer. Contains the
    /// expected and actual counts.
    InputSizeMismatch {
        /// The size of the input layer.
        expected: usize,
        /// The number of values supplied.
        actual: usize,
    },
    /// The network has no weights or biases to aggregate (a single-layer network).
    NoWeightsOrBiases,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyTopology => write!(f, "empty topology"),
            Self::InvalidWeightRange(min, max) => {
                write!(f, "invalid weight range [{}, {}]", min, max)
            }
            Self::InputSizeMismatch { expected, actual } => write!(
                f,
                "expected {} input values for the input layer, got {}",
                expected, actual
            ),
            Self::NoWeightsOrBiases => {
                write!(f, "the network has no weights or biases to aggregate")
            }
        }
    }
}

impl error::Error for Error {}

/// The reason why a mutation's parameters are invalid.
#[derive(Clone, Debug, PartialEq)]
pub enum MutationError {
    /// The per-element mutation probability is outside `[0, 1]` or not finite. Contains the
    /// requested probability.
    InvalidProbability(f64),
    /// The mutation step standard deviation is negative or not finite. Contains the requested
    /// standard deviation.
    InvalidStepSize(f64),
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidProbability(p) => {
                write!(f, "invalid mutation probability {}", p)
            }
            Self::InvalidStepSize(s) => {
                write!(f, "invalid mutation step standard deviation {}", s)
            }
        }
    }
}

impl error::Error for MutationError {}
