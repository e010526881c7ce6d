//! Generation stepping with B4/S9 rules.

use rayon::prelude::*;

use super::grid::{count_neighbors, Dimensions, Lattice};

/// An alive cell survives only with exactly this many alive neighbors.
pub const SURVIVAL_NEIGHBORS: u8 = 9;

/// A dead cell is born only with exactly this many alive neighbors.
pub const BIRTH_NEIGHBORS: u8 = 4;

/// Next state of a single cell.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors == SURVIVAL_NEIGHBORS
    } else {
        neighbors == BIRTH_NEIGHBORS
    }
}

/// Fill one z-plane of the next generation from the old cells.
fn step_plane(dims: &Dimensions, old: &[bool], z: usize, out: &mut [bool]) {
    for y in 0..dims.height() {
        for x in 0..dims.width() {
            let idx = dims.index_of(z, y, x);
            let neighbors = count_neighbors(dims, old, z, y, x);
            out[y * dims.width() + x] = next_state(old[idx], neighbors);
        }
    }
}

impl Lattice {
    /// Advance one generation.
    ///
    /// B4/S9 rules over the Moore neighborhood (26 neighbors, clipped at the bounds):
    /// - Birth: a dead cell with exactly 4 neighbors becomes alive
    /// - Survival: an alive cell with exactly 9 neighbors survives
    /// - Everything else is dead
    ///
    /// Planes are computed in parallel on the current rayon pool. All reads come from
    /// the old buffer and the result goes into a freshly allocated one.
    pub fn step(&mut self) {
        let dims = self.dims;
        let old = &self.cells;
        let mut next = vec![false; dims.len()];

        next.par_chunks_mut(dims.plane_len())
            .enumerate()
            .for_each(|(z, plane)| step_plane(&dims, old, z, plane));

        self.cells = next.into();
        self.generation += 1;
    }

    /// Single-threaded equivalent of [`Lattice::step`].
    pub fn step_serial(&mut self) {
        let dims = self.dims;
        let mut next = vec![false; dims.len()];

        for (z, plane) in next.chunks_mut(dims.plane_len()).enumerate() {
            step_plane(&dims, &self.cells, z, plane);
        }

        self.cells = next.into();
        self.generation += 1;
    }
}
