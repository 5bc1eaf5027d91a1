use std::time::Instant;

use crate::simulation::driver::Simulation;
use crate::simulation::forces::{NewtonianGravity, Softening};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3};

/// Helper to build a deterministic system of `n` bodies around a central star
fn make_bodies(n: usize) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n);
    bodies.push(Body::new(0, "star", 1.98892e30, 1.327124400189e20, 695700.0));

    for i in 1..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let r = 1.0e11 * (1.0 + 0.05 * i_f);
        let x = NVec3::new(
            r * (i_f * 0.37).cos(),
            r * (i_f * 0.37).sin(),
            1.0e9 * (i_f * 0.07).sin(),
        );
        // roughly circular speed, perpendicular to the radius
        let speed = (1.327124400189e20 / r).sqrt();
        let v = NVec3::new(-speed * (i_f * 0.37).sin(), speed * (i_f * 0.37).cos(), 0.0);

        bodies.push(
            Body::new(i, format!("body-{i}"), 1.0e22, 1.0e22 * 6.673e-11, 1000.0)
                .with_state(x, v)
                .with_period(365),
        );
    }

    bodies
}

fn make_simulation(n: usize) -> Simulation {
    let gravity = NewtonianGravity::new(Softening::default());
    let mut sim = Simulation::with_settings(make_bodies(n), Parameters::default(), gravity);
    sim.set_running(true);
    sim
}

/// Time `tick()` for a range of body counts, printed as CSV.
/// Paste output directly into a spreadsheet to graph
pub fn bench_tick_curve() {
    println!("N,tick_us");

    for n in (2..=200).step_by(14) {
        // small n: average over more ticks to smooth noise
        let ticks = if n <= 50 { 2000 } else { 200 };

        let mut sim = make_simulation(n);

        // Warm-up
        sim.tick();

        let t0 = Instant::now();
        for _ in 0..ticks {
            sim.tick();
        }
        let us = t0.elapsed().as_secs_f64() * 1.0e6 / ticks as f64;

        println!("{},{:.3}", n, us);
    }
}
