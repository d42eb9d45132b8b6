//! Build a fully-initialized simulator from configuration.
//!
//! Takes a [`ScenarioConfig`] (JSON-facing) and produces a runtime
//! [`Simulator`] with validated bodies. All validation failures (bad mass,
//! bad step size) surface here, before any stepping happens.

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Simulator;
use crate::simulation::error::SimError;
use crate::simulation::states::{Body, NVec3};

/// Map scenario configuration into a ready-to-run [`Simulator`].
pub fn build_simulator(cfg: &ScenarioConfig) -> Result<Simulator, SimError> {
    let bodies = cfg
        .bodies
        .iter()
        .map(|(name, bc)| {
            Body::new(
                name.clone(),
                bc.mass,
                NVec3::new(bc.coordinates[0], bc.coordinates[1], bc.coordinates[2]),
                NVec3::new(bc.velocity[0], bc.velocity[1], bc.velocity[2]),
            )
        })
        .collect::<Result<Vec<Body>, SimError>>()?;

    Simulator::new(bodies, cfg.time, cfg.dx, cfg.factor)
}
