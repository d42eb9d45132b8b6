//! Fixed-step time integration for the N-body system.
//!
//! One explicit Euler-family step per call: each body is advanced
//! independently from its own pre-step state and the net force already
//! accumulated for this step. The position update carries a quadratic
//! correction term (dv * dt / 2) derived from the *current* step's
//! acceleration, so this is neither pure forward Euler nor velocity-Verlet.
//!
//! The scheme does not conserve energy exactly; long-run orbital drift is an
//! accepted characteristic of this integrator, not a defect. The order of
//! operations below is part of the engine's contract and must not be
//! rearranged.

use crate::simulation::states::Body;

/// Advance every body by one step of size `dt` seconds, in place.
///
/// Reads only pre-step state: forces come from positions as they were when
/// the forces were accumulated, and no body's update reads another body's
/// already-updated position or velocity.
pub fn advance_one_step(bodies: &mut [Body], dt: f64) {
    for body in bodies.iter_mut() {
        // a = F / m
        let acceleration = body.force / body.mass;

        // dv = a * dt
        let dv = acceleration * dt;

        // ds = (dv * dt) / 2, second-order position correction using this
        // step's own velocity delta before it is committed
        let ds = (dv * dt) / 2.0;

        body.position += body.velocity * dt + ds;
        body.velocity += dv;
    }
}
