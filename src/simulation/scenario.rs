//! Build a ready-to-run `Simulation` from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it, converts the body
//! table from km and km/s to SI, and wires up parameters, softening policy
//! and initial run state. The body list is fixed from here on.

use tracing::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig, SofteningMode};
use crate::error::ConfigError;
use crate::simulation::driver::Simulation;
use crate::simulation::forces::{NewtonianGravity, Softening};
use crate::simulation::params::{Parameters, DEFAULT_SOFTENING_EPS, G};
use crate::simulation::states::{Body, NVec3};

const KM: f64 = 1000.0;

impl Simulation {
    pub fn from_config(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        build_simulation(cfg)
    }
}

pub fn build_simulation(cfg: &ScenarioConfig) -> Result<Simulation, ConfigError> {
    // Bodies: index in the table becomes the stable id
    let bodies = cfg
        .bodies
        .iter()
        .enumerate()
        .map(|(id, bc)| body_from_config(id, bc))
        .collect::<Result<Vec<Body>, ConfigError>>()?;

    // Parameters
    let p_cfg = &cfg.parameters;
    if !(p_cfg.render_scale.is_finite() && p_cfg.render_scale > 0.0) {
        return Err(ConfigError::InvalidParameter {
            name: "render_scale",
            reason: format!("must be positive and finite, got {}", p_cfg.render_scale),
        });
    }
    let parameters = Parameters::new(p_cfg.step_seconds, p_cfg.render_scale).map_err(|e| {
        ConfigError::InvalidParameter { name: "step_seconds", reason: e.to_string() }
    })?;

    // Gravity law
    let e_cfg = &cfg.engine;
    let softening = match e_cfg.softening {
        SofteningMode::Softened => {
            let eps = e_cfg.eps.unwrap_or(DEFAULT_SOFTENING_EPS);
            if !(eps.is_finite() && eps > 0.0) {
                return Err(ConfigError::InvalidParameter {
                    name: "eps",
                    reason: format!("must be positive and finite, got {eps}"),
                });
            }
            Softening::Softened { eps }
        }
        SofteningMode::Unsoftened => Softening::Unsoftened,
    };

    let count = bodies.len();
    let selected = e_cfg.selected.unwrap_or(0);
    if count > 0 && selected >= count {
        return Err(ConfigError::SelectionOutOfRange { selected, count });
    }

    let mut sim = Simulation::with_settings(bodies, parameters, NewtonianGravity::new(softening));
    sim.engine.selected = selected;
    sim.set_running(e_cfg.running);

    info!(
        bodies = count,
        softening = softening.label(),
        step_seconds = sim.step_seconds(),
        running = sim.is_running(),
        "scenario built"
    );

    Ok(sim)
}

/// Map one table row to a runtime body, converting km -> m
fn body_from_config(id: usize, bc: &BodyConfig) -> Result<Body, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBody { name: bc.name.clone(), reason };

    if bc.x.iter().chain(bc.v.iter()).any(|c| !c.is_finite()) {
        return Err(invalid("position and velocity must be finite".into()));
    }
    if !(bc.mass.is_finite() && bc.mass > 0.0) {
        return Err(invalid(format!("mass must be positive, got {}", bc.mass)));
    }
    if !(bc.radius.is_finite() && bc.radius >= 0.0) {
        return Err(invalid(format!("radius must not be negative, got {}", bc.radius)));
    }

    let gm = bc.gm.unwrap_or(G * bc.mass);
    if !gm.is_finite() {
        return Err(invalid(format!("gm must be finite, got {gm}")));
    }

    let x = NVec3::from(bc.x) * KM;
    let v = NVec3::from(bc.v) * KM;

    Ok(Body::new(id, bc.name.as_str(), bc.mass, gm, bc.radius)
        .with_state(x, v)
        .with_kind(bc.kind)
        .with_tilt(bc.tilt)
        .with_period(bc.period_days))
}
