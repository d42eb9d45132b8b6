//! Wall-clock benchmarks for the direct pairwise engine.
//!
//! Times force accumulation and full stepping over deterministically
//! generated systems of increasing size. Output goes to stdout as simple
//! CSV-ish lines for pasting into a spreadsheet.

use std::time::Instant;

use crate::simulation::engine::Simulator;
use crate::simulation::states::{Body, NVec3};

/// Helper to build a deterministic system of size `n`.
/// Positions come from sin/cos of the index, no rand needed; the spread is
/// wide enough that no pair is coincident.
fn make_system(n: usize) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0e9 + i_f,
            (i_f * 0.13).cos() * 5.0e9,
            (i_f * 0.07).sin() * 5.0e9,
        );

        let body = Body::new(format!("body{}", i), 1.0e24, x, NVec3::zeros())
            .expect("benchmark bodies have positive mass");
        bodies.push(body);
    }

    bodies
}

/// Time a single force pass for a range of system sizes.
pub fn bench_forces() {
    let ns = [10, 20, 40, 80, 160, 320, 640, 1280];

    println!("N,pairs,force_pass_ms");
    for n in ns {
        let bodies = make_system(n);
        let mut sim = Simulator::new(bodies, 1.0, 1.0, 86400.0)
            .expect("benchmark timing parameters are valid");

        // Warm up
        sim.compute_forces().expect("benchmark system has no coincident pair");

        let t0 = Instant::now();
        sim.compute_forces().expect("benchmark system has no coincident pair");
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{},{:.6}", n, sim.pair_count(), ms);
    }
}

/// Time full steps (force pass + state update) for a range of system sizes.
/// Small n: average over several steps to smooth noise.
pub fn bench_step_curve() {
    println!("N,step_ms");

    // Steps of 10 to give a smooth curve
    for n in (10..=1280).step_by(10) {
        let steps = if n <= 160 { 20 } else { 5 };

        let bodies = make_system(n);
        let mut sim = Simulator::new(bodies, 1.0, 1.0, 86400.0)
            .expect("benchmark timing parameters are valid");

        // Warm up
        sim.step().expect("benchmark system has no coincident pair");

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step().expect("benchmark system has no coincident pair");
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
