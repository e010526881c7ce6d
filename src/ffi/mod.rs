//! C FFI layer for renderers and other external drivers.
//!
//! This module exports C ABI functions over an opaque `Simulation` handle.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton`, `history` and `simulation` modules. These
//! functions are thin wrappers that handle null checks, pointer safety, and C-to-Rust
//! conversions.

pub mod history;
pub mod lattice;
pub mod lifecycle;

pub use history::{vl_compute_time_us, vl_extract_colors, vl_extract_snapshot, vl_history_len};
pub use lattice::{vl_get_cell, vl_neighbor_count, vl_run, vl_step};
pub use lifecycle::{vl_create, vl_create_from_cells, vl_destroy, vl_get_generation};
