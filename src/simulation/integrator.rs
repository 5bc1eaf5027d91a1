//! Fixed-step time integration
//!
//! Semi-implicit (symplectic) Euler: the velocity kick uses the acceleration
//! of the current tick, and the position drift uses the *updated* velocity.
//! Swapping the two lines turns this into explicit Euler, whose orbits
//! spiral outwards.

use super::states::{NVec3, System};

/// v <- v + a*dt, then x <- x + v*dt
pub fn semi_implicit_euler(x: &mut NVec3, v: &mut NVec3, a: &NVec3, dt: f64) {
    // Kick
    *v += a * dt;
    // Drift, with the new velocity
    *x += *v * dt;
}

/// Integrate every body by `dt`; accelerations must already be complete for the tick
pub fn integrate_all(sys: &mut System, dt: f64) {
    for body in sys.bodies.iter_mut() {
        body.integrate(dt);
    }
}
