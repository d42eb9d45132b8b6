pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;

pub use simulation::states::{Body, NVec3, G};
pub use simulation::engine::{Simulator, Trajectories};
pub use simulation::error::SimError;
pub use simulation::forces::{accumulate_forces, unique_pairs};
pub use simulation::integrator::advance_one_step;
pub use simulation::scenario::build_simulator;

pub use configuration::config::{BodyConfig, ScenarioConfig};

pub use output::export::write_json;

pub use benchmark::benchmark::{bench_forces, bench_step_curve};
