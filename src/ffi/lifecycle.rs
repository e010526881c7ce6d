//! Simulation creation, destruction, and generation queries.

use tracing::warn;

use crate::automaton::{Dimensions, Lattice};
use crate::error::{ConfigError, LatticeError};
use crate::simulation::{Simulation, SimulationConfig};

/// Creates a seeded cubic simulation and returns an opaque pointer.
///
/// `density_permille` is the chance of a cell starting alive, in thousandths (500 = half).
///
/// # Returns
/// A pointer to a new Simulation, or null if any argument is invalid.
///
/// # Safety
/// The returned pointer must eventually be freed with `vl_destroy()`.
#[no_mangle]
pub extern "C" fn vl_create(
    size: i16,
    seed: u64,
    density_permille: u16,
    num_threads: u8,
) -> *mut Simulation {
    if size <= 0 {
        warn!(size, "vl_create: size must be positive");
        return std::ptr::null_mut();
    }

    let config = SimulationConfig::default()
        .with_size(size as usize)
        .with_seed(seed)
        .with_density(f64::from(density_permille) / 1000.0)
        .with_threads(usize::from(num_threads));

    match Simulation::new(&config) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(e) => {
            warn!(error = %e, "vl_create rejected");
            std::ptr::null_mut()
        }
    }
}

/// Creates a simulation from caller-supplied cells.
///
/// # Layout
/// `in_buf` is read in z,y,x order (z changes slowest, x changes fastest).
/// Input values are normalized: 0 = dead, non-zero = alive.
///
/// # Safety
/// - `in_buf` must point to at least `depth * height * width` readable bytes, or be null
///
/// # Returns
/// A pointer to a new Simulation, or null on a null buffer or bad dimensions.
#[no_mangle]
pub unsafe extern "C" fn vl_create_from_cells(
    depth: i16,
    height: i16,
    width: i16,
    in_buf: *const u8,
    num_threads: u8,
) -> *mut Simulation {
    if in_buf.is_null() {
        return std::ptr::null_mut();
    }
    if depth <= 0 || height <= 0 || width <= 0 {
        let e = LatticeError::InvalidDimension {
            depth: i64::from(depth),
            height: i64::from(height),
            width: i64::from(width),
        };
        warn!(error = %e, "vl_create_from_cells rejected");
        return std::ptr::null_mut();
    }

    let dims = match Dimensions::new(depth as usize, height as usize, width as usize) {
        Ok(dims) => dims,
        Err(e) => {
            warn!(error = %e, "vl_create_from_cells rejected");
            return std::ptr::null_mut();
        }
    };
    let bytes = std::slice::from_raw_parts(in_buf, dims.len());
    let cells = bytes.iter().map(|&b| b != 0).collect();

    let sim = Lattice::from_cells(dims, cells)
        .map_err(ConfigError::from)
        .and_then(|lattice| Simulation::from_lattice(lattice, usize::from(num_threads)));
    match sim {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(e) => {
            warn!(error = %e, "vl_create_from_cells rejected");
            std::ptr::null_mut()
        }
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `vl_create()` or `vl_create_from_cells()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn vl_destroy(ptr: *mut Simulation) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_get_generation(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}
