//! Pre-flight memory estimation and fallible buffer allocation.
//!
//! Every per-trial buffer is sized with checked arithmetic and reserved with
//! `try_reserve_exact`, so an oversized `numpoints × dimension` request
//! surfaces as [`SimulationError::AllocationFailed`] rather than an abort.

use crate::{
    error::{Result, SimulationError},
    mst::Extraction,
    weight::UniformWeights,
};

/// Size of an `f64`: coordinates, frontier distances, cached weights.
const F64_BYTES: u64 = 8;

/// Size of a `bool` in the `in_tree` vector.
const BOOL_BYTES: u64 = 1;

/// Size of one lazy heap entry (`f64` weight plus `usize` node).
const HEAP_ENTRY_BYTES: u64 = 16;

/// Heap entries allowed per node before the heap is rebuilt from the live
/// frontier.
///
/// One relaxation pushes at most one entry per outside node, so a heap
/// compacted whenever it exceeds `HEAP_STALE_FACTOR * n` entries never holds
/// more than `(HEAP_STALE_FACTOR + 1) * n`.
pub(crate) const HEAP_STALE_FACTOR: usize = 2;

/// Returns an estimate of the bytes one trial holds live for `point_count`
/// points in `dimension` dimensions.
///
/// The estimate covers the coordinate matrix (or the cached uniform weight
/// triangle when `dimension == 0` and [`UniformWeights::Cached`] is selected),
/// the frontier `dist`/`in_tree` vectors, and the heap reserved when
/// `extraction` is [`Extraction::BinaryHeap`]. Arithmetic saturates rather
/// than overflowing.
///
/// # Examples
///
/// ```
/// use randmst_core::{Extraction, UniformWeights, estimate_trial_bytes};
///
/// let linear = Extraction::LinearScan;
/// assert_eq!(estimate_trial_bytes(0, 3, UniformWeights::Fresh, linear), 0);
///
/// let euclidean = estimate_trial_bytes(1_000, 2, UniformWeights::Fresh, linear);
/// let cached = estimate_trial_bytes(1_000, 0, UniformWeights::Cached, linear);
/// assert!(cached > euclidean, "the weight triangle dominates at n = 1000");
/// ```
#[must_use]
pub fn estimate_trial_bytes(
    point_count: usize,
    dimension: usize,
    uniform: UniformWeights,
    extraction: Extraction,
) -> u64 {
    if point_count == 0 {
        return 0;
    }

    let n = point_count as u64;
    let d = dimension as u64;

    let substrate = if dimension > 0 {
        n.saturating_mul(d).saturating_mul(F64_BYTES)
    } else {
        match uniform {
            UniformWeights::Fresh => 0,
            UniformWeights::Cached => triangle_len_u64(n).saturating_mul(F64_BYTES),
        }
    };

    let frontier = n.saturating_mul(F64_BYTES.saturating_add(BOOL_BYTES));

    let heap = match extraction {
        Extraction::LinearScan => 0,
        Extraction::BinaryHeap => n
            .saturating_mul(HEAP_STALE_FACTOR as u64 + 1)
            .saturating_mul(HEAP_ENTRY_BYTES),
    };

    substrate.saturating_add(frontier).saturating_add(heap)
}

const fn triangle_len_u64(n: u64) -> u64 {
    n.saturating_mul(n.saturating_sub(1)) / 2
}

/// Number of entries in the strict upper triangle of an `n × n` matrix.
pub(crate) fn triangle_len(what: &'static str, n: usize) -> Result<usize> {
    let product = checked_product(what, n, n.saturating_sub(1))?;
    Ok(product / 2)
}

/// Multiplies two dimensions, reporting overflow as an allocation failure.
pub(crate) fn checked_product(what: &'static str, left: usize, right: usize) -> Result<usize> {
    left.checked_mul(right)
        .ok_or(SimulationError::AllocationFailed {
            what,
            elements: (left as u128).saturating_mul(right as u128),
        })
}

/// Clears `buffer` and refills it with `len` copies of `value`, reserving the
/// capacity fallibly first.
pub(crate) fn refill<T: Clone>(
    buffer: &mut Vec<T>,
    what: &'static str,
    len: usize,
    value: T,
) -> Result<()> {
    buffer.clear();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| SimulationError::AllocationFailed {
            what,
            elements: len as u128,
        })?;
    buffer.resize(len, value);
    Ok(())
}
