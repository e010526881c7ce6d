//! Error types for lattice construction, queries and driver configuration.

use thiserror::Error;

use crate::automaton::Dimensions;

/// Errors raised by the lattice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatticeError {
    /// A dimension was zero (or negative at the C boundary).
    #[error("invalid lattice dimensions {depth}x{height}x{width}: every axis must be positive")]
    InvalidDimension { depth: i64, height: i64, width: i64 },

    /// The total cell count does not fit in memory addressing.
    #[error("lattice dimensions {depth}x{height}x{width} overflow the cell count")]
    TooLarge {
        depth: usize,
        height: usize,
        width: usize,
    },

    /// The cell buffer does not describe a dense box of the declared size.
    #[error("cell buffer shape mismatch: expected {expected} cells, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A coordinate outside the lattice was queried.
    #[error("coordinate ({z}, {y}, {x}) is outside lattice {dimensions}")]
    OutOfBounds {
        z: usize,
        y: usize,
        x: usize,
        dimensions: Dimensions,
    },
}

/// Errors raised when validating a [`SimulationConfig`](crate::SimulationConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("lattice size must be positive")]
    ZeroSize,

    #[error("generation count must be positive")]
    ZeroGenerations,

    #[error("thread count must be positive")]
    ZeroThreads,

    #[error("density {0} is outside [0, 1]")]
    DensityOutOfRange(f64),

    /// The rayon pool could not be built.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),

    #[error(transparent)]
    Lattice(#[from] LatticeError),
}

/// Result type for lattice operations.
pub type Result<T> = std::result::Result<T, LatticeError>;
