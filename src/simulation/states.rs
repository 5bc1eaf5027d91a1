//! Core state types for the solar-system simulation.
//!
//! Defines the per-body kinematic state (`Body`) and the aggregate that owns
//! the ordered body list together with the simulation clock (`System`).
//!
//! All kinematic quantities are SI: metres, metres/second, metres/second².

use nalgebra::Vector3;
use serde::Deserialize;

use crate::simulation::clock::SimulationClock;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::trail::OrbitTrail;

pub type NVec3 = Vector3<f64>;

/// Coarse classification of a body, used for grouping and trail display
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Star,
    #[default]
    Planet,
    DwarfPlanet,
    Asteroid,
}

#[derive(Debug, Clone)]
pub struct Body {
    id: usize,         // stable index, also the render lookup key
    name: String,      // display name
    kind: BodyKind,
    mass: f64,         // kg, display only
    gm: f64,           // m^3/s^2, used by the force law
    radius: f64,       // render radius (km)
    tilt: f64,         // axial tilt (degrees)
    period_days: u32,  // 0 = no tracked orbit
    pub(crate) x: NVec3, // position
    pub(crate) v: NVec3, // velocity
    pub(crate) a: NVec3, // acceleration, rebuilt every tick
    trail: Option<OrbitTrail>,
}

impl Body {
    /// Create a body at rest in its kinematic frame with zero acceleration.
    /// A trail is allocated only when `period_days > 0`.
    pub fn new(id: usize, name: impl Into<String>, mass: f64, gm: f64, radius: f64) -> Self {
        Self {
            id,
            name: name.into(),
            kind: BodyKind::default(),
            mass,
            gm,
            radius,
            tilt: 0.0,
            period_days: 0,
            x: NVec3::zeros(),
            v: NVec3::zeros(),
            a: NVec3::zeros(),
            trail: None,
        }
    }

    pub fn with_state(mut self, x: NVec3, v: NVec3) -> Self {
        self.x = x;
        self.v = v;
        self
    }

    pub fn with_kind(mut self, kind: BodyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_tilt(mut self, tilt: f64) -> Self {
        self.tilt = tilt;
        self
    }

    pub fn with_period(mut self, period_days: u32) -> Self {
        self.period_days = period_days;
        self.trail = OrbitTrail::new(period_days as usize);
        self
    }

    pub fn id(&self) -> usize { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn kind(&self) -> BodyKind { self.kind }
    pub fn mass(&self) -> f64 { self.mass }
    pub fn gm(&self) -> f64 { self.gm }
    pub fn radius(&self) -> f64 { self.radius }
    pub fn tilt(&self) -> f64 { self.tilt }
    pub fn period_days(&self) -> u32 { self.period_days }
    pub fn position(&self) -> NVec3 { self.x }
    pub fn velocity(&self) -> NVec3 { self.v }
    pub fn acceleration(&self) -> NVec3 { self.a }
    pub fn trail(&self) -> Option<&OrbitTrail> { self.trail.as_ref() }

    /// Zero the acceleration before a new accumulation pass
    pub fn reset_acceleration(&mut self) {
        self.a = NVec3::zeros();
    }

    /// Add the pull of `other` to this body's acceleration.
    ///
    /// One-directional: `other` is not touched. The caller guarantees
    /// `other` is a different body; that is checked by index, never by distance.
    pub fn accumulate_from(&mut self, other: &Body, gravity: &NewtonianGravity) {
        debug_assert_ne!(self.id, other.id, "body {} pulled by itself", self.name);
        self.a += gravity.pull(&self.x, &other.x, other.gm);
    }

    /// Advance velocity then position by `dt` seconds
    pub fn integrate(&mut self, dt: f64) {
        semi_implicit_euler(&mut self.x, &mut self.v, &self.a, dt);
    }

    /// Store the scaled position for `day_index` if this body keeps a trail
    pub fn record_history(&mut self, day_index: u64, render_scale: f64) {
        let p = self.x * render_scale;
        if let Some(trail) = self.trail.as_mut() {
            trail.record(day_index, p);
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).chain(self.a.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>,       // fixed order: integration = display order
    pub clock: SimulationClock,  // simulated time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            clock: SimulationClock::default(),
        }
    }
}
