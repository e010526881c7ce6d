//! History export for renderers: raw snapshots, fade colors, timing.

use crate::simulation::Simulation;

/// Number of recorded generations.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The history length, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_history_len(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).history().len() as u64
}

/// Copies recorded generation `index` (0 = first step) into a flat byte buffer.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest),
/// one byte per cell: 0 = dead, 1 = alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
/// - `out_buf` must point to at least `len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written, or 0 on a bad index, a short buffer, or null pointers.
#[no_mangle]
pub unsafe extern "C" fn vl_extract_snapshot(
    ptr: *const Simulation,
    index: u64,
    out_buf: *mut u8,
    len: u64,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let Some(snapshot) = (*ptr).history().get(index as usize) else {
        return 0;
    };
    let cells = snapshot.cells();
    if (len as usize) < cells.len() {
        return 0;
    }

    let out = std::slice::from_raw_parts_mut(out_buf, cells.len());
    for (dst, &alive) in out.iter_mut().zip(cells) {
        *dst = u8::from(alive);
    }
    cells.len() as u64
}

/// Writes the fade colors of frame `index` as interleaved RGB floats.
///
/// Frame `index` holds the colors accumulated over generations `0..=index`,
/// so the last frame equals the full color field.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
/// - `out_buf` must point to at least `len` writable floats, or be null
///
/// # Returns
/// Number of floats written (3 per cell), or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn vl_extract_colors(
    ptr: *const Simulation,
    index: u64,
    out_buf: *mut f32,
    len: u64,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let history = (*ptr).history();
    let Some(frame) = history.color_frames().nth(index as usize) else {
        return 0;
    };

    let out = std::slice::from_raw_parts_mut(out_buf, len as usize);
    frame.colors.write_rgb(out) as u64
}

/// Total time spent stepping, in microseconds.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
#[no_mangle]
pub unsafe extern "C" fn vl_compute_time_us(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).history().elapsed_compute_time().as_micros() as u64
}
