//! Heat-fade color encoding derived from the snapshot history.
//!
//! Each coordinate carries a heat level. Being alive sets it to [`FADE_GENERATIONS`];
//! every dead generation removes one level until it reaches zero. The color is
//! `(1, 1 - heat * FADE_STEP, 0)`: red while hot, yellow once fully cooled.

use crate::automaton::Dimensions;
use crate::error::Result;

use super::{SimulationHistory, Snapshot};

/// Intensity lost per dead generation.
pub const FADE_STEP: f32 = 0.1;

/// Dead generations needed to cool from hot to the floor.
pub const FADE_GENERATIONS: u8 = 10;

/// Per-coordinate fade state, flat in z/y/x order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorField {
    dims: Dimensions,
    heat: Vec<u8>,
}

impl ColorField {
    /// A field where nothing has been alive yet.
    pub fn cold(dims: Dimensions) -> Self {
        Self {
            dims,
            heat: vec![0; dims.len()],
        }
    }

    /// Apply one generation: alive cells reset to hot, dead cells cool by one level.
    pub fn fold(&mut self, snapshot: &Snapshot) {
        for (heat, &alive) in self.heat.iter_mut().zip(snapshot.cells()) {
            *heat = if alive {
                FADE_GENERATIONS
            } else {
                heat.saturating_sub(1)
            };
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Intensity in `[0, 1]`; 1 means alive in the latest folded generation.
    pub fn intensity(&self, z: usize, y: usize, x: usize) -> Result<f32> {
        let idx = self.dims.check(z, y, x)?;
        Ok(intensity_of(self.heat[idx]))
    }

    /// RGB triple for one coordinate.
    pub fn get(&self, z: usize, y: usize, x: usize) -> Result<[f32; 3]> {
        let idx = self.dims.check(z, y, x)?;
        Ok(rgb_of(self.heat[idx]))
    }

    /// RGB triples for every coordinate, flat in z/y/x order.
    pub fn colors(&self) -> Vec<[f32; 3]> {
        self.heat.iter().map(|&h| rgb_of(h)).collect()
    }

    /// Write interleaved RGB floats into `out`. Returns the number of floats written,
    /// or 0 if `out` is too small.
    pub fn write_rgb(&self, out: &mut [f32]) -> usize {
        let needed = self.heat.len() * 3;
        if out.len() < needed {
            return 0;
        }
        for (chunk, &h) in out.chunks_exact_mut(3).zip(&self.heat) {
            chunk.copy_from_slice(&rgb_of(h));
        }
        needed
    }
}

#[inline]
fn intensity_of(heat: u8) -> f32 {
    f32::from(heat) * FADE_STEP
}

#[inline]
fn rgb_of(heat: u8) -> [f32; 3] {
    [1.0, (1.0 - intensity_of(heat)).max(0.0), 0.0]
}

/// Colors as they stood right after `snapshot` was folded.
#[derive(Clone, Debug)]
pub struct ColorFrame<'a> {
    pub generation: u64,
    pub snapshot: &'a Snapshot,
    pub colors: ColorField,
}

/// Iterator over [`ColorFrame`]s, see [`SimulationHistory::color_frames`].
pub struct ColorFrames<'a> {
    snapshots: std::slice::Iter<'a, Snapshot>,
    field: ColorField,
}

impl<'a> ColorFrames<'a> {
    pub(super) fn new(history: &'a SimulationHistory) -> Self {
        Self {
            snapshots: history.snapshots.iter(),
            field: ColorField::cold(history.dims),
        }
    }
}

impl<'a> Iterator for ColorFrames<'a> {
    type Item = ColorFrame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let snapshot = self.snapshots.next()?;
        self.field.fold(snapshot);
        Some(ColorFrame {
            generation: snapshot.generation(),
            snapshot,
            colors: self.field.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.snapshots.size_hint()
    }
}

impl ExactSizeIterator for ColorFrames<'_> {}
