//! Voxel Life - 3D Game of Life engine
//!
//! A bounded cubic lattice stepped with the B4/S9 rule over the 26-cell Moore
//! neighborhood, an append-only history of every generation, and a heat-fade color
//! field derived from that history for renderers.
//!
//! The library is usable from Rust directly and exposes a C ABI in [`ffi`].

pub mod automaton;
pub mod error;
pub mod ffi;
pub mod history;
pub mod seed;
pub mod simulation;

pub use automaton::{Dimensions, Lattice, BIRTH_NEIGHBORS, SURVIVAL_NEIGHBORS};
pub use error::{ConfigError, LatticeError, Result};
pub use history::{ColorField, ColorFrame, SimulationHistory, Snapshot, FADE_STEP};
pub use seed::{generate_seed, random_grid, seeded_grid};
pub use simulation::{Simulation, SimulationConfig};
