//! Configuration types for loading simulation scenarios from JSON.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario:
//!
//! - [`BodyConfig`]     – initial state for one body
//! - [`ScenarioConfig`] – top-level wrapper: the body map plus timing
//!
//! # JSON format
//! An example scenario matching these types:
//!
//! ```json
//! {
//!   "bodies": {
//!     "Sun":   { "mass": 1.9891e30,
//!                "coordinates": [0, 0, 0],
//!                "velocity": [0, 0, 0] },
//!     "Earth": { "mass": 5.97219e24,
//!                "coordinates": [1.5e11, 0, 0],
//!                "velocity": [0, 30000, 0] }
//!   },
//!   "time": 365,
//!   "dx": 1,
//!   "factor": 86400
//! }
//! ```
//!
//! `time` is the total duration and `dx` the step size, both in an arbitrary
//! scenario unit; `factor` is the number of seconds per unit (86400 for
//! days). Any missing field is a deserialization error, raised before the
//! simulation core is ever constructed.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Initial state for a single body.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub mass: f64,              // mass in kg
    pub coordinates: [f64; 3],  // initial position [x, y, z] in m
    pub velocity: [f64; 3],     // initial velocity [vx, vy, vz] in m/s
}

/// Top-level scenario configuration loaded from JSON.
///
/// Bodies are keyed by name; the map is ordered, so construction order (and
/// with it the index order of the resulting trajectories) is deterministic
/// regardless of key order in the source file.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub bodies: BTreeMap<String, BodyConfig>, // name -> initial state
    pub time: f64,   // total duration in scenario units
    pub dx: f64,     // step size in scenario units
    pub factor: f64, // seconds per scenario unit
}
