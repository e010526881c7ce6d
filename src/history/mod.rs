//! Append-only record of past generations.
//!
//! Every step of a [`Lattice`] produces a new cell buffer; the history keeps a shared
//! handle to each one in order. Buffers are never written after they are recorded, so
//! recording is O(1) and a snapshot can be handed to a renderer while stepping continues.

pub mod color;

use std::sync::Arc;
use std::time::Duration;

use crate::automaton::{Dimensions, Lattice};
use crate::error::Result;

pub use color::{ColorField, ColorFrame, ColorFrames, FADE_GENERATIONS, FADE_STEP};

/// Immutable cell state of one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    generation: u64,
    dims: Dimensions,
    cells: Arc<[bool]>,
}

impl Snapshot {
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Cells, flat in z/y/x order.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn is_alive(&self, z: usize, y: usize, x: usize) -> Result<bool> {
        let idx = self.dims.check(z, y, x)?;
        Ok(self.cells[idx])
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl Lattice {
    /// Capture the current generation. Shares the buffer instead of copying it.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            dims: self.dims,
            cells: Arc::clone(&self.cells),
        }
    }
}

/// Ordered snapshots, oldest first, plus the time spent computing them.
#[derive(Clone, Debug)]
pub struct SimulationHistory {
    dims: Dimensions,
    snapshots: Vec<Snapshot>,
    elapsed_compute_time: Duration,
}

impl SimulationHistory {
    /// An empty history for snapshots of `lattice`.
    pub fn for_lattice(lattice: &Lattice) -> Self {
        Self::new(lattice.dimensions())
    }

    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            snapshots: Vec::new(),
            elapsed_compute_time: Duration::ZERO,
        }
    }

    /// Append a snapshot.
    ///
    /// # Panics
    /// If the snapshot's dimensions differ from this history's. Recording a snapshot
    /// of another lattice is a caller defect, like an out-of-bounds query.
    pub fn record(&mut self, snapshot: Snapshot) {
        assert_eq!(
            snapshot.dims, self.dims,
            "snapshot {} recorded into history {}",
            snapshot.dims, self.dims
        );
        self.snapshots.push(snapshot);
    }

    /// Add the duration of one step to the running total.
    pub fn add_compute_time(&mut self, elapsed: Duration) {
        self.elapsed_compute_time += elapsed;
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Total time spent in recorded steps. Informational only.
    pub fn elapsed_compute_time(&self) -> Duration {
        self.elapsed_compute_time
    }

    /// Fade colors after folding every snapshot in order.
    ///
    /// A cell alive in the latest snapshot is hot red `(1, 0, 0)`. Each dead generation
    /// since it was last alive cools it by [`FADE_STEP`] toward yellow `(1, 1, 0)`.
    pub fn compute_color_field(&self) -> ColorField {
        let mut field = ColorField::cold(self.dims);
        for snapshot in &self.snapshots {
            field.fold(snapshot);
        }
        field
    }

    /// One frame per snapshot, each carrying the colors accumulated up to that generation.
    pub fn color_frames(&self) -> ColorFrames<'_> {
        ColorFrames::new(self)
    }
}

impl<'a> IntoIterator for &'a SimulationHistory {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
