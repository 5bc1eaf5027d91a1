//! Read-only views for the display layer
//!
//! The core stores SI units only. Everything here converts on the way out:
//! astronomical units for distances, and a formatted diagnostics block for
//! the selected body.

use std::fmt;

use crate::simulation::driver::Simulation;
use crate::simulation::params::AU;
use crate::simulation::states::{Body, BodyKind, NVec3};

pub fn to_au(meters: f64) -> f64 {
    meters / AU
}

pub fn to_km(meters: f64) -> f64 {
    meters / 1000.0
}

/// Which bodies get their orbit trail drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailFilter {
    pub planets: bool,   // planets and dwarf planets
    pub asteroids: bool,
}

impl Default for TrailFilter {
    fn default() -> Self {
        Self { planets: true, asteroids: false }
    }
}

impl TrailFilter {
    pub fn shows(&self, body: &Body) -> bool {
        if body.trail().is_none() {
            return false;
        }
        match body.kind() {
            BodyKind::Star => false,
            BodyKind::Planet | BodyKind::DwarfPlanet => self.planets,
            BodyKind::Asteroid => self.asteroids,
        }
    }

    /// Indices of the bodies whose trails should be drawn this frame
    pub fn visible<'a>(&'a self, sim: &'a Simulation) -> impl Iterator<Item = usize> + 'a {
        sim.bodies().iter().filter(|b| self.shows(b)).map(Body::id)
    }
}

/// Snapshot of one body for the stats panel
#[derive(Debug, Clone)]
pub struct BodyReport {
    pub name: String,
    pub position: NVec3,
    pub velocity: NVec3,
    pub acceleration: NVec3,
    pub mass: f64,
    /// Distance to the first body (the star) in AU
    pub distance_au: Option<f64>,
}

impl BodyReport {
    pub fn new(body: &Body, reference: Option<&Body>) -> Self {
        let distance_au = reference
            .filter(|r| r.id() != body.id())
            .map(|r| to_au((body.position() - r.position()).norm()));

        Self {
            name: body.name().to_string(),
            position: body.position(),
            velocity: body.velocity(),
            acceleration: body.acceleration(),
            mass: body.mass(),
            distance_au,
        }
    }

    pub fn for_index(sim: &Simulation, index: usize) -> Option<Self> {
        sim.body(index).map(|b| Self::new(b, sim.body(0)))
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn accel_magnitude(&self) -> f64 {
        self.acceleration.norm()
    }
}

impl fmt::Display for BodyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.position;
        let v = &self.velocity;
        let a = &self.acceleration;
        writeln!(f, "{}", self.name)?;
        writeln!(f, " px: {:e} m", p.x)?;
        writeln!(f, " py: {:e} m", p.y)?;
        writeln!(f, " pz: {:e} m", p.z)?;
        writeln!(f, " vx: {:.3} m/s", v.x)?;
        writeln!(f, " vy: {:.3} m/s", v.y)?;
        writeln!(f, " vz: {:.3} m/s", v.z)?;
        writeln!(f, " v: {:.3} m/s", self.speed())?;
        writeln!(f, " ax: {:e}", a.x)?;
        writeln!(f, " ay: {:e}", a.y)?;
        writeln!(f, " az: {:e}", a.z)?;
        writeln!(f, " accel: {:e} m/s^2", self.accel_magnitude())?;
        if let Some(d) = self.distance_au {
            writeln!(f, " r: {d:.6} AU")?;
        }
        write!(f, " mass: {:e} kg", self.mass)
    }
}
