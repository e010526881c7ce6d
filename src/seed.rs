//! Reproducible initial grids.
//!
//! Randomness always comes from an RNG value owned by the caller, never from
//! process-wide state, so the same seed yields the same lattice.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::automaton::{Dimensions, Lattice};
use crate::error::Result;

/// Probability of a cell starting alive when none is given (a fair coin per cell).
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Digits in a seed from [`generate_seed`].
pub const SEED_DIGITS: u32 = 8;

/// Fill a lattice with cells that are alive with probability `density`, drawn in z/y/x order.
///
/// `density` is clamped to `[0, 1]`; NaN counts as 0.
pub fn random_grid<R: Rng + ?Sized>(rng: &mut R, dims: Dimensions, density: f64) -> Lattice {
    let p = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    Lattice::from_fn(dims, |_, _, _| rng.gen_bool(p))
}

/// Cubic lattice of edge `size` seeded from `seed`.
pub fn seeded_grid(seed: u64, size: usize, density: f64) -> Result<Lattice> {
    let dims = Dimensions::cube(size)?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(random_grid(&mut rng, dims, density))
}

/// Pick a fresh seed: an eight digit number whose digits are each 1 to 9.
pub fn generate_seed<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    (0..SEED_DIGITS).fold(0, |acc, _| acc * 10 + rng.gen_range(1..=9u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_grid() {
        let a = seeded_grid(12345678, 10, DEFAULT_DENSITY).unwrap();
        let b = seeded_grid(12345678, 10, DEFAULT_DENSITY).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_grid() {
        let a = seeded_grid(1, 10, DEFAULT_DENSITY).unwrap();
        let b = seeded_grid(2, 10, DEFAULT_DENSITY).unwrap();
        assert_ne!(a.cells(), b.cells());
    }

    #[test]
    fn test_density_extremes() {
        let dims = Dimensions::cube(6).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(random_grid(&mut rng, dims, 0.0).alive_count(), 0);
        assert_eq!(random_grid(&mut rng, dims, 1.0).alive_count(), dims.len());
        // Out-of-range densities are clamped rather than rejected
        assert_eq!(random_grid(&mut rng, dims, 3.0).alive_count(), dims.len());
        assert_eq!(random_grid(&mut rng, dims, -1.0).alive_count(), 0);
    }

    #[test]
    fn test_half_density_is_roughly_half() {
        let lattice = seeded_grid(99, 20, DEFAULT_DENSITY).unwrap();
        let alive = lattice.alive_count();
        // 8000 cells, expect about 4000
        assert!((3500..4500).contains(&alive), "alive = {alive}");
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(seeded_grid(1, 0, DEFAULT_DENSITY).is_err());
    }

    #[test]
    fn test_generate_seed_digits() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..100 {
            let seed = generate_seed(&mut rng);
            let digits = seed.to_string();
            assert_eq!(digits.len(), SEED_DIGITS as usize);
            assert!(digits.chars().all(|c| ('1'..='9').contains(&c)));
        }
    }
}
