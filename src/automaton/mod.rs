//! Core automaton logic: the lattice and its generation rule.
//!
//! Everything here is single-owner and synchronous; [`Lattice::step`] fans the
//! per-plane work out on the current rayon pool and joins before returning.

pub mod grid;
pub mod stepping;

pub use grid::{Dimensions, Lattice};
pub use stepping::{next_state, BIRTH_NEIGHBORS, SURVIVAL_NEIGHBORS};
