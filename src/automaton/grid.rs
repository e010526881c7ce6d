//! Lattice construction, indexing and neighbor counting.

use std::fmt;
use std::sync::Arc;

use crate::error::{LatticeError, Result};

/// Extent of a lattice along each axis, in `(depth, height, width)` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    depth: usize,
    height: usize,
    width: usize,
}

impl Dimensions {
    /// Validate and build a set of dimensions. Every axis must be positive and the
    /// total cell count must fit in `usize`.
    pub fn new(depth: usize, height: usize, width: usize) -> Result<Self> {
        if depth == 0 || height == 0 || width == 0 {
            return Err(LatticeError::InvalidDimension {
                depth: depth as i64,
                height: height as i64,
                width: width as i64,
            });
        }
        if depth
            .checked_mul(height)
            .and_then(|plane| plane.checked_mul(width))
            .is_none()
        {
            return Err(LatticeError::TooLarge {
                depth,
                height,
                width,
            });
        }
        Ok(Self {
            depth,
            height,
            width,
        })
    }

    /// A cube with the given edge length.
    pub fn cube(size: usize) -> Result<Self> {
        Self::new(size, size, size)
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.depth * self.height * self.width
    }

    /// Always false for validated dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells in one z-plane.
    #[inline]
    pub fn plane_len(&self) -> usize {
        self.height * self.width
    }

    /// Linear index for a 3D coordinate, z slowest and x fastest.
    #[inline]
    pub fn index_of(&self, z: usize, y: usize, x: usize) -> usize {
        z * self.height * self.width + y * self.width + x
    }

    /// Inverse of [`Dimensions::index_of`].
    #[inline]
    pub fn coord_of(&self, idx: usize) -> (usize, usize, usize) {
        let plane = self.plane_len();
        (idx / plane, (idx % plane) / self.width, idx % self.width)
    }

    #[inline]
    pub fn in_bounds(&self, z: usize, y: usize, x: usize) -> bool {
        z < self.depth && y < self.height && x < self.width
    }

    pub(crate) fn check(&self, z: usize, y: usize, x: usize) -> Result<usize> {
        if self.in_bounds(z, y, x) {
            Ok(self.index_of(z, y, x))
        } else {
            Err(LatticeError::OutOfBounds {
                z,
                y,
                x,
                dimensions: *self,
            })
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.depth, self.height, self.width)
    }
}

/// Clipped `[lo, hi)` range of the 3-wide window centred on `c` along an axis of length `len`.
#[inline]
fn window(c: usize, len: usize) -> std::ops::Range<usize> {
    c.saturating_sub(1)..(c + 2).min(len)
}

/// Count alive neighbors of an in-bounds cell in `cells` (Moore neighborhood, 26 neighbors).
///
/// The 3x3x3 block is clipped to the lattice; nothing wraps around.
pub(crate) fn count_neighbors(dims: &Dimensions, cells: &[bool], z: usize, y: usize, x: usize) -> u8 {
    let mut count = 0;

    for nz in window(z, dims.depth) {
        for ny in window(y, dims.height) {
            let row = dims.index_of(nz, ny, 0);
            for nx in window(x, dims.width) {
                // Skip the center cell
                if nz == z && ny == y && nx == x {
                    continue;
                }
                count += u8::from(cells[row + nx]);
            }
        }
    }

    count
}

/// A dense 3D grid of alive/dead cells.
///
/// The current generation lives in a shared immutable buffer. Stepping allocates a
/// fresh buffer, so every [`Snapshot`](crate::Snapshot) taken earlier stays untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    pub(crate) dims: Dimensions,
    pub(crate) cells: Arc<[bool]>,
    pub(crate) generation: u64,
}

impl Lattice {
    /// Build a lattice from a nested `[z][y][x]` array.
    ///
    /// Fails with [`LatticeError::InvalidDimension`] if any axis is empty and with
    /// [`LatticeError::ShapeMismatch`] if the array is ragged.
    pub fn new(cells: Vec<Vec<Vec<bool>>>) -> Result<Self> {
        let depth = cells.len();
        let height = cells.first().map_or(0, Vec::len);
        let width = cells
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, Vec::len);
        let dims = Dimensions::new(depth, height, width)?;

        let mut flat = Vec::with_capacity(dims.len());
        for plane in cells {
            if plane.len() != height {
                return Err(LatticeError::ShapeMismatch {
                    expected: dims.plane_len(),
                    actual: plane.iter().map(Vec::len).sum(),
                });
            }
            for row in plane {
                if row.len() != width {
                    return Err(LatticeError::ShapeMismatch {
                        expected: width,
                        actual: row.len(),
                    });
                }
                flat.extend(row);
            }
        }

        Ok(Self::from_parts(dims, flat.into()))
    }

    /// Build a lattice from a flat buffer in z/y/x order.
    pub fn from_cells(dims: Dimensions, cells: Vec<bool>) -> Result<Self> {
        if cells.len() != dims.len() {
            return Err(LatticeError::ShapeMismatch {
                expected: dims.len(),
                actual: cells.len(),
            });
        }
        Ok(Self::from_parts(dims, cells.into()))
    }

    /// An all-dead lattice.
    pub fn dead(dims: Dimensions) -> Self {
        Self::from_parts(dims, vec![false; dims.len()].into())
    }

    /// Build a lattice by evaluating `f(z, y, x)` for every coordinate.
    pub fn from_fn(dims: Dimensions, mut f: impl FnMut(usize, usize, usize) -> bool) -> Self {
        let cells: Vec<bool> = (0..dims.len())
            .map(|idx| {
                let (z, y, x) = dims.coord_of(idx);
                f(z, y, x)
            })
            .collect();
        Self::from_parts(dims, cells.into())
    }

    pub(crate) fn from_parts(dims: Dimensions, cells: Arc<[bool]>) -> Self {
        Self {
            dims,
            cells,
            generation: 0,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Number of completed steps since construction.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current cells, flat in z/y/x order.
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

    /// Number of alive cells in the clipped 3x3x3 block around `(z, y, x)`, excluding
    /// the cell itself. Ranges from 0 to 26; a corner cell sees at most 7.
    pub fn neighbor_count(&self, z: usize, y: usize, x: usize) -> Result<u8> {
        self.dims.check(z, y, x)?;
        Ok(count_neighbors(&self.dims, &self.cells, z, y, x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_alive(size: usize, z: usize, y: usize, x: usize) -> Lattice {
        let dims = Dimensions::cube(size).unwrap();
        Lattice::from_fn(dims, |cz, cy, cx| (cz, cy, cx) == (z, y, x))
    }

    #[test]
    fn test_index_of() {
        let dims = Dimensions::cube(4).unwrap();

        // First cell
        assert_eq!(dims.index_of(0, 0, 0), 0);
        // Last cell
        assert_eq!(dims.index_of(3, 3, 3), 63);
        // Various cells
        assert_eq!(dims.index_of(0, 0, 1), 1);
        assert_eq!(dims.index_of(0, 1, 0), 4);
        assert_eq!(dims.index_of(1, 0, 0), 16);

        assert_eq!(dims.coord_of(27), (1, 2, 3));
    }

    #[test]
    fn test_non_cubic_index_round_trip() {
        let dims = Dimensions::new(2, 3, 5).unwrap();
        for idx in 0..dims.len() {
            let (z, y, x) = dims.coord_of(idx);
            assert_eq!(dims.index_of(z, y, x), idx);
        }
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Dimensions::new(0, 4, 4),
            Err(LatticeError::InvalidDimension { depth: 0, .. })
        ));
        assert!(matches!(
            Lattice::new(vec![]),
            Err(LatticeError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Lattice::new(vec![vec![vec![]]]),
            Err(LatticeError::InvalidDimension { width: 0, .. })
        ));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let huge = usize::MAX / 2;
        assert_eq!(
            Dimensions::new(huge, 3, 1),
            Err(LatticeError::TooLarge {
                depth: huge,
                height: 3,
                width: 1
            })
        );
        assert!(Dimensions::new(1, huge, huge).is_err());
    }

    #[test]
    fn test_every_constructor_rejects_zero_axis() {
        for (d, h, w) in [(0, 3, 3), (2, 0, 3), (2, 3, 0)] {
            assert!(matches!(
                Dimensions::new(d, h, w),
                Err(LatticeError::InvalidDimension { .. })
            ));
        }
        assert!(Dimensions::cube(0).is_err());

        // The smallest box that can be built still steps cleanly
        let dims = Dimensions::new(1, 1, 1).unwrap();
        assert_eq!((dims.depth(), dims.height(), dims.width()), (1, 1, 1));
        let mut lattice = Lattice::from_fn(dims, |_, _, _| true);
        lattice.step();
        assert_eq!(lattice.alive_count(), 0);
        let mut empty = Lattice::dead(dims);
        empty.step();
        assert_eq!(empty.generation(), 1);
    }

    #[test]
    fn test_ragged_input_rejected() {
        let ragged = vec![
            vec![vec![true, false], vec![false, false]],
            vec![vec![true, false], vec![false]],
        ];
        assert_eq!(
            Lattice::new(ragged),
            Err(LatticeError::ShapeMismatch {
                expected: 2,
                actual: 1
            })
        );

        let dims = Dimensions::cube(2).unwrap();
        assert_eq!(
            Lattice::from_cells(dims, vec![false; 7]),
            Err(LatticeError::ShapeMismatch {
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn test_nested_layout_matches_flat() {
        let nested = vec![
            vec![vec![true, false, false], vec![false, false, true]],
            vec![vec![false, true, false], vec![false, false, false]],
        ];
        let lattice = Lattice::new(nested).unwrap();
        assert_eq!(lattice.dimensions(), Dimensions::new(2, 2, 3).unwrap());
        assert!(lattice.is_alive(0, 0, 0).unwrap());
        assert!(lattice.is_alive(0, 1, 2).unwrap());
        assert!(lattice.is_alive(1, 0, 1).unwrap());
        assert_eq!(lattice.alive_count(), 3);
        assert_eq!(lattice.generation(), 0);
    }

    #[test]
    fn test_single_cell_not_counted_as_own_neighbor() {
        let lattice = single_alive(5, 2, 2, 2);

        assert_eq!(lattice.neighbor_count(2, 2, 2).unwrap(), 0);
        for z in 0..5usize {
            for y in 0..5usize {
                for x in 0..5usize {
                    if (z, y, x) == (2, 2, 2) {
                        continue;
                    }
                    let adjacent = z.abs_diff(2) <= 1 && y.abs_diff(2) <= 1 && x.abs_diff(2) <= 1;
                    let expected = u8::from(adjacent);
                    assert_eq!(lattice.neighbor_count(z, y, x).unwrap(), expected);
                }
            }
        }
    }

    #[test]
    fn test_count_neighbors_cross() {
        // Center + 4 neighbors in the same z-plane
        let dims = Dimensions::cube(8).unwrap();
        let alive = [(4, 4, 4), (4, 4, 3), (4, 4, 5), (4, 3, 4), (4, 5, 4)];
        let lattice = Lattice::from_fn(dims, |z, y, x| alive.contains(&(z, y, x)));

        // Center sees the 4 arms
        assert_eq!(lattice.neighbor_count(4, 4, 4).unwrap(), 4);

        // Each arm sees the center and the two adjacent arms
        assert_eq!(lattice.neighbor_count(4, 4, 3).unwrap(), 3);
        assert_eq!(lattice.neighbor_count(4, 4, 5).unwrap(), 3);
        assert_eq!(lattice.neighbor_count(4, 3, 4).unwrap(), 3);

        // Directly above the center sees all five
        assert_eq!(lattice.neighbor_count(5, 4, 4).unwrap(), 5);

        // Far cell should have 0 neighbors
        assert_eq!(lattice.neighbor_count(0, 0, 0).unwrap(), 0);
    }

    #[test]
    fn test_boundary_clipping_full_lattice() {
        let dims = Dimensions::cube(4).unwrap();
        let lattice = Lattice::from_fn(dims, |_, _, _| true);

        // Corners
        assert_eq!(lattice.neighbor_count(0, 0, 0).unwrap(), 7);
        assert_eq!(lattice.neighbor_count(3, 3, 3).unwrap(), 7);
        assert_eq!(lattice.neighbor_count(0, 3, 0).unwrap(), 7);
        // Edge
        assert_eq!(lattice.neighbor_count(0, 0, 1).unwrap(), 11);
        // Face
        assert_eq!(lattice.neighbor_count(0, 1, 1).unwrap(), 17);
        // Interior
        assert_eq!(lattice.neighbor_count(1, 2, 1).unwrap(), 26);
    }

    #[test]
    fn test_no_wraparound() {
        // Alive cell on one face must not be seen from the opposite face
        let lattice = single_alive(4, 0, 0, 0);
        assert_eq!(lattice.neighbor_count(3, 0, 0).unwrap(), 0);
        assert_eq!(lattice.neighbor_count(0, 3, 3).unwrap(), 0);
        assert_eq!(lattice.neighbor_count(1, 1, 1).unwrap(), 1);
    }

    #[test]
    fn test_out_of_bounds_query() {
        let lattice = single_alive(3, 1, 1, 1);
        let err = lattice.neighbor_count(3, 0, 0).unwrap_err();
        assert_eq!(
            err,
            LatticeError::OutOfBounds {
                z: 3,
                y: 0,
                x: 0,
                dimensions: lattice.dimensions(),
            }
        );
        assert!(lattice.neighbor_count(0, 0, 7).is_err());
        assert!(lattice.is_alive(0, 9, 0).is_err());
    }

    #[test]
    fn test_flat_axis_lattice() {
        // 1 x 1 x 5 line: only x-neighbors exist
        let dims = Dimensions::new(1, 1, 5).unwrap();
        let lattice = Lattice::from_fn(dims, |_, _, _| true);
        assert_eq!(lattice.neighbor_count(0, 0, 0).unwrap(), 1);
        assert_eq!(lattice.neighbor_count(0, 0, 2).unwrap(), 2);
    }
}
