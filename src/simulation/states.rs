//! Core state types for the N-body simulation.
//!
//! Defines the 3D [`Body`] struct used by the engine: an immutable identity
//! (`name`, `mass`) plus mutable physical state (`position`, `velocity`) and
//! a transient `force` accumulator that is fully recomputed every step.

use nalgebra::Vector3;

use crate::simulation::error::SimError;

pub type NVec3 = Vector3<f64>;

/// Newtonian gravitational constant, m^3 kg^-1 s^-2.
pub const G: f64 = 6.674e-11;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // unique identifier, used as output-map key
    pub mass: f64, // mass (kg), strictly positive
    pub position: NVec3, // position (m)
    pub velocity: NVec3, // velocity (m/s)
    pub force: NVec3, // net force (N), scratch space recomputed each step
}

impl Body {
    /// Create a body from scenario data.
    ///
    /// The engine divides by `mass` every step, so a zero or negative mass
    /// would silently turn the whole run into NaN/Inf; reject it up front.
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        position: NVec3,
        velocity: NVec3,
    ) -> Result<Self, SimError> {
        let name = name.into();
        if mass <= 0.0 {
            return Err(SimError::InvalidMass { name, mass });
        }
        Ok(Self {
            name,
            mass,
            position,
            velocity,
            force: NVec3::zeros(),
        })
    }

    /// Magnitude of the gravitational attraction between `self` and `other`.
    ///
    /// F = G * m1 * m2 / d^2. Errors on zero separation, where the force
    /// direction and magnitude are undefined.
    pub fn grav_force_magnitude(&self, other: &Body) -> Result<f64, SimError> {
        let d2 = (self.position - other.position).norm_squared();
        if d2 == 0.0 {
            return Err(SimError::CoincidentBodies {
                a: self.name.clone(),
                b: other.name.clone(),
            });
        }
        Ok(G * self.mass * other.mass / d2)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Body) -> f64 {
        (self.position - other.position).norm()
    }

    /// Unit vector pointing from `self` toward `other`.
    /// Undefined at zero separation; callers check the distance first.
    pub fn unit_vector_to(&self, other: &Body) -> NVec3 {
        (other.position - self.position) / self.distance(other)
    }
}
