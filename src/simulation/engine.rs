//! The simulation engine: owns the bodies, the pair list, and the stepping
//! loop.
//!
//! [`Simulator`] is constructed once from scenario data and then driven
//! either step by step or to completion with [`Simulator::run`], which
//! records every body's position after each step into a [`Trajectories`]
//! history. Membership is fixed: no bodies are added or removed after
//! construction, so the pair list is computed exactly once.

use std::collections::BTreeMap;

use crate::simulation::error::SimError;
use crate::simulation::forces::{accumulate_forces, unique_pairs};
use crate::simulation::integrator::advance_one_step;
use crate::simulation::states::{Body, NVec3};

#[derive(Debug, Clone)]
pub struct Simulator {
    bodies: Vec<Body>,
    pairs: Vec<(usize, usize)>, // unique unordered index pairs, i < j
    step_count: usize, // floor(time / dx), clamped to >= 0
    dt: f64, // step size in seconds: factor * dx
    force_buf: Vec<NVec3>, // per-body accumulation buffer, reused each step
}

impl Simulator {
    /// Build a simulator from initial bodies and timing parameters.
    ///
    /// `time` and `dx` are expressed in an arbitrary scenario unit (days,
    /// hours, ...); `factor` is the number of seconds in that unit, so the
    /// internal physics always runs in SI seconds. A `time` smaller than
    /// `dx` (including zero or negative) yields a zero-step simulation.
    pub fn new(bodies: Vec<Body>, time: f64, dx: f64, factor: f64) -> Result<Self, SimError> {
        if dx <= 0.0 {
            return Err(SimError::InvalidStepSize { dx });
        }
        if factor <= 0.0 {
            return Err(SimError::InvalidTimeFactor { factor });
        }

        let step_count = (time / dx).floor().max(0.0) as usize;
        let dt = factor * dx;
        let pairs = unique_pairs(bodies.len());
        let force_buf = vec![NVec3::zeros(); bodies.len()];

        Ok(Self {
            bodies,
            pairs,
            step_count,
            dt,
            force_buf,
        })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Number of unique pairs evaluated per force pass: n(n-1)/2.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Step size in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Recompute every body's net force from current positions.
    ///
    /// Resets all accumulators first; each unique pair is visited exactly
    /// once and both members updated with opposite signs. Calling this twice
    /// without moving any body yields identical forces both times.
    pub fn compute_forces(&mut self) -> Result<(), SimError> {
        accumulate_forces(&self.bodies, &self.pairs, &mut self.force_buf)?;
        for (body, f) in self.bodies.iter_mut().zip(self.force_buf.iter()) {
            body.force = *f;
        }
        Ok(())
    }

    /// One full step: force accumulation from pre-step positions, then the
    /// per-body state update.
    pub fn step(&mut self) -> Result<(), SimError> {
        self.compute_forces()?;
        advance_one_step(&mut self.bodies, self.dt);
        Ok(())
    }

    /// Run the whole simulation: `step_count` full steps, recording a copy
    /// of every body's position after each one.
    ///
    /// Every history in the result has length `step_count`; a zero-step run
    /// returns empty histories for all bodies.
    pub fn run(&mut self) -> Result<Trajectories, SimError> {
        // vec![..; n] would clone the template and lose the capacity
        let mut histories: Vec<Vec<[f64; 3]>> = (0..self.bodies.len())
            .map(|_| Vec::with_capacity(self.step_count))
            .collect();

        for _ in 0..self.step_count {
            self.step()?;
            for (body, history) in self.bodies.iter().zip(histories.iter_mut()) {
                let p = body.position;
                history.push([p.x, p.y, p.z]);
            }
        }

        let names = self.bodies.iter().map(|b| b.name.clone()).collect();
        Ok(Trajectories { names, histories })
    }
}

/// Recorded position histories for a completed run.
///
/// Histories are stored ordered-by-construction and indexed by body
/// position, with name lookup as a secondary view; this keeps the result
/// unambiguous even if two bodies were given the same name.
#[derive(Debug, Clone)]
pub struct Trajectories {
    names: Vec<String>,
    histories: Vec<Vec<[f64; 3]>>,
}

impl Trajectories {
    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// History of body `index`, in construction order.
    pub fn history(&self, index: usize) -> &[[f64; 3]] {
        &self.histories[index]
    }

    /// History of the first body with the given name.
    pub fn by_name(&self, name: &str) -> Option<&[[f64; 3]]> {
        let index = self.names.iter().position(|n| n == name)?;
        Some(&self.histories[index])
    }

    /// Name-keyed view of the histories. Later entries win on duplicate
    /// names; avoiding duplicates is the caller's responsibility.
    pub fn into_map(self) -> BTreeMap<String, Vec<[f64; 3]>> {
        self.names.into_iter().zip(self.histories).collect()
    }
}
