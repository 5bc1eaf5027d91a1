//! Gravitational acceleration for the direct-summation engine
//!
//! Every ordered pair (receiver, source) is evaluated on its own, so a tick
//! costs N·(N-1) pair evaluations. The pull uses the source's stored `GM`
//! rather than `G * mass`; the two are allowed to disagree per body.

use crate::simulation::params::DEFAULT_SOFTENING_EPS;
use crate::simulation::states::{Body, NVec3};

/// How the separation is measured in the force law
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Softening {
    /// dist = sqrt(|d|^2 + eps^2), finite at zero separation
    Softened { eps: f64 },
    /// dist = |d|, singular when two bodies coincide
    Unsoftened,
}

impl Default for Softening {
    fn default() -> Self {
        Softening::Softened { eps: DEFAULT_SOFTENING_EPS }
    }
}

impl Softening {
    pub fn label(&self) -> &'static str {
        match self {
            Softening::Softened { .. } => "softened",
            Softening::Unsoftened => "unsoftened",
        }
    }
}

/// Newtonian point-mass gravity, a = GM * d / dist^3
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonianGravity {
    pub softening: Softening,
}

impl NewtonianGravity {
    pub fn new(softening: Softening) -> Self {
        Self { softening }
    }

    /// Acceleration felt at `receiver` due to a mass with parameter `source_gm` at `source`.
    ///
    /// With softening disabled and coincident positions the result is NaN;
    /// that propagates instead of being masked.
    pub fn pull(&self, receiver: &NVec3, source: &NVec3, source_gm: f64) -> NVec3 {
        // displacement from receiver to source, the direction of the pull
        let d = source - receiver;

        let d2 = match self.softening {
            Softening::Softened { eps } => d.dot(&d) + eps * eps,
            Softening::Unsoftened => d.dot(&d),
        };
        let dist = d2.sqrt();

        // inverse cube on the raw displacement == inverse square on the unit vector
        let f = source_gm / (dist * dist * dist);
        f * d
    }

    /// Rebuild every body's acceleration from all ordered pairs.
    ///
    /// Only accelerations are written, so every pair sees the positions the
    /// tick started with regardless of iteration order.
    pub fn accumulate(&self, bodies: &mut [Body]) {
        for body in bodies.iter_mut() {
            body.reset_acceleration();
        }

        for i in 0..bodies.len() {
            // split around i so the receiver is borrowed mutably and the rest shared
            let (head, rest) = bodies.split_at_mut(i);
            if let Some((receiver, tail)) = rest.split_first_mut() {
                for source in head.iter().chain(tail.iter()) {
                    receiver.accumulate_from(source, self);
                }
            }
        }
    }
}
