//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – run state, softening policy, selected body
//! - [`ParametersConfig`] – step size and render scale
//! - [`BodyConfig`]       – initial state and constants for each body
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   running: false          # start paused
//!   softening: softened     # or "unsoftened"
//!   eps: 4.0e6              # softening length in metres
//!   selected: 1
//!
//! parameters:
//!   step_seconds: 86400.0   # one simulated day per tick
//!   render_scale: 5.0e-10   # metres -> scene units for trails
//!
//! bodies:
//!   - name: Sun
//!     kind: star
//!     x: [0.0, 0.0, 0.0]    # km
//!     v: [0.0, 0.0, 0.0]    # km/s
//!     mass: 1.98892e30      # kg
//!     gm: 1.327124400189e20 # m^3/s^2
//!     radius: 48699.0       # km, render only
//!   - name: Earth
//!     x: [-5.969534792469550e7, -1.384328330091216e8, -1.539442552493513e4]
//!     v: [2.686684747512509e1, -1.191462405401140e1, -1.789306645543220e-4]
//!     mass: 5.97219e24
//!     gm: 3.9860044189e14
//!     radius: 6378.1
//!     tilt: 23.45
//!     period_days: 365
//! ```
//!
//! Positions and velocities are kilometres and kilometres/second, the units
//! of the ephemeris tables they come from; the scenario builder converts
//! them to SI. A body without `gm` gets `G * mass`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::params::{DEFAULT_RENDER_SCALE, SECONDS_PER_DAY};
use crate::simulation::states::BodyKind;

/// Builtin 14-body solar system (Sun, planets, Pluto and four large asteroids)
pub const SOLAR_SYSTEM_YAML: &str = include_str!("../../scenarios/solar_system.yaml");

/// Which distance measure the gravity law uses
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SofteningMode {
    #[default]
    Softened,
    Unsoftened,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub running: bool,              // start running instead of paused
    pub softening: SofteningMode,   // softened or raw distance
    pub eps: Option<f64>,           // softening length (m), only for `softened`
    pub selected: Option<usize>,    // body shown in the diagnostics, 0 when omitted
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub step_seconds: f64, // simulated seconds per tick
    pub render_scale: f64, // scale applied to trail samples
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            step_seconds: SECONDS_PER_DAY,
            render_scale: DEFAULT_RENDER_SCALE,
        }
    }
}

/// Configuration for a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    #[serde(default)]
    pub kind: BodyKind,
    pub x: [f64; 3],        // initial position (km)
    pub v: [f64; 3],        // initial velocity (km/s)
    pub mass: f64,          // kg
    pub gm: Option<f64>,    // m^3/s^2, defaults to G * mass
    pub radius: f64,        // render radius (km)
    #[serde(default)]
    pub tilt: f64,          // axial tilt (degrees)
    #[serde(default)]
    pub period_days: u32,   // trail length in days, 0 = none
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn builtin_solar_system() -> Result<Self, ConfigError> {
        Self::from_yaml_str(SOLAR_SYSTEM_YAML)
    }
}
