//! Error taxonomy for the simulation core.
//!
//! All variants are terminal for the run: the engine never retries or
//! recovers, it reports and stops. Degenerate-but-finite inputs (e.g. wildly
//! unphysical masses that are still positive) are not detected; the contract
//! for those is garbage in, garbage out.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Mass <= 0 at body construction. Division by mass happens every step,
    /// so this would otherwise surface much later as NaN positions.
    InvalidMass { name: String, mass: f64 },
    /// Two bodies at exactly zero separation: the pairwise force direction
    /// and magnitude are undefined. Policy is fail-fast rather than feeding
    /// NaN into subsequent steps.
    CoincidentBodies { a: String, b: String },
    /// Step size `dx` <= 0: step count is derived by dividing by it.
    InvalidStepSize { dx: f64 },
    /// Unit conversion `factor` (seconds per scenario time unit) <= 0.
    InvalidTimeFactor { factor: f64 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidMass { name, mass } => {
                write!(f, "body '{}' has non-positive mass {} kg", name, mass)
            }
            SimError::CoincidentBodies { a, b } => {
                write!(f, "bodies '{}' and '{}' are at identical coordinates", a, b)
            }
            SimError::InvalidStepSize { dx } => {
                write!(f, "step size dx = {} must be positive", dx)
            }
            SimError::InvalidTimeFactor { factor } => {
                write!(f, "time unit factor = {} must be positive", factor)
            }
        }
    }
}

impl Error for SimError {}
