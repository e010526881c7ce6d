//! Stepping, cell access, and neighbor queries.

use crate::simulation::Simulation;

/// Converts C coordinates to lattice coordinates; negatives are out of bounds.
#[inline]
fn coords(z: i16, y: i16, x: i16) -> Option<(usize, usize, usize)> {
    if z < 0 || y < 0 || x < 0 {
        return None;
    }
    Some((z as usize, y as usize, x as usize))
}

/// Advances the simulation by one generation and records it.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
#[no_mangle]
pub unsafe extern "C" fn vl_step(ptr: *mut Simulation) {
    if ptr.is_null() {
        return;
    }

    (*ptr).step();
}

/// Advances the simulation by `generations` steps.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
#[no_mangle]
pub unsafe extern "C" fn vl_run(ptr: *mut Simulation, generations: u32) {
    if ptr.is_null() {
        return;
    }

    (*ptr).run(generations as usize);
}

/// Gets the state of a cell in the current generation (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn vl_get_cell(ptr: *const Simulation, z: i16, y: i16, x: i16) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    let Some((z, y, x)) = coords(z, y, x) else {
        return 0;
    };
    (*ptr)
        .lattice()
        .is_alive(z, y, x)
        .map(u8::from)
        .unwrap_or(0)
}

/// Counts alive neighbors of a cell in the current generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// 0 to 26, or -1 if out of bounds or ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_neighbor_count(ptr: *const Simulation, z: i16, y: i16, x: i16) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    let Some((z, y, x)) = coords(z, y, x) else {
        return -1;
    };
    (*ptr)
        .lattice()
        .neighbor_count(z, y, x)
        .map(i32::from)
        .unwrap_or(-1)
}
