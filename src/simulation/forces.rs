//! Pairwise Newtonian gravity for the n-body engine.
//!
//! Direct O(n^2) summation: every unique unordered pair is visited exactly
//! once per evaluation and both members are updated from a single force
//! computation (Newton's third law), halving the arithmetic versus a naive
//! all-pairs double loop.

use crate::simulation::error::SimError;
use crate::simulation::states::{Body, NVec3};

/// Accumulate net gravitational forces into `out`, one slot per body.
///
/// `pairs` is the precomputed list of unique index pairs (i, j) with i < j.
/// The buffer is zeroed first, so repeated calls with unchanged positions
/// produce identical results (no hidden accumulation across calls).
///
/// Writing into a separate buffer instead of the bodies themselves keeps the
/// two mutations per pair from aliasing; the caller commits the buffer back
/// in one pass.
pub fn accumulate_forces(
    bodies: &[Body],
    pairs: &[(usize, usize)],
    out: &mut [NVec3],
) -> Result<(), SimError> {
    // Zero buffer
    for f in out.iter_mut() {
        *f = NVec3::zeros();
    }

    for &(i, j) in pairs {
        let bi = &bodies[i];
        let bj = &bodies[j];

        // Scalar magnitude G*mi*mj/d^2; errors on a zero-distance pair
        let magnitude = bi.grav_force_magnitude(bj)?;

        // Direction from i toward j, so the pull on i is along +u
        let u = bi.unit_vector_to(bj);
        let force = magnitude * u;

        // Newton's third law: equal and opposite
        out[i] += force;
        out[j] -= force;
    }

    Ok(())
}

/// All unique unordered index pairs (i, j), i < j, for `n` bodies.
/// Size n(n-1)/2; computed once at simulator construction.
pub fn unique_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((i, j));
        }
    }
    pairs
}
