//! The simulation aggregate and its per-frame entry point.
//!
//! `Simulation` exclusively owns the bodies. Renderers and UI read them
//! through [`Simulation::bodies`] and may only write the step size, the
//! run state, and the selected body index.
//!
//! One call to [`Simulation::tick`] runs, in this order:
//! 1. reset every acceleration,
//! 2. accumulate gravity over all ordered pairs,
//! 3. integrate every body,
//! 4. advance the clock,
//! 5. record orbit history.
//!
//! The accumulate pass finishes before any body moves.

use tracing::{debug, trace, warn};

use crate::error::SimError;
use crate::simulation::engine::{Engine, RunState};
use crate::simulation::forces::{NewtonianGravity, Softening};
use crate::simulation::integrator::integrate_all;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

#[derive(Debug, Clone)]
pub struct Simulation {
    pub(crate) engine: Engine,
    pub(crate) parameters: Parameters,
    pub(crate) system: System,
    pub(crate) gravity: NewtonianGravity,
}

impl Simulation {
    /// Paused simulation with default parameters and softened gravity
    pub fn new(bodies: Vec<Body>) -> Self {
        Self::with_settings(bodies, Parameters::default(), NewtonianGravity::default())
    }

    pub fn with_settings(bodies: Vec<Body>, parameters: Parameters, gravity: NewtonianGravity) -> Self {
        Self {
            engine: Engine::default(),
            parameters,
            system: System::new(bodies),
            gravity,
        }
    }

    /// Advance one configured step; no-op while paused
    pub fn tick(&mut self) {
        if !self.engine.state.is_running() {
            return;
        }

        let dt = self.parameters.step_seconds();
        let bodies = &mut self.system.bodies;

        self.gravity.accumulate(bodies);
        if bodies.iter().any(|b| !b.acceleration().iter().all(|c| c.is_finite())) {
            warn!(softening = self.gravity.softening.label(), "non-finite acceleration, coincident bodies");
        }

        integrate_all(&mut self.system, dt);

        let clock = &mut self.system.clock;
        clock.advance(dt);
        let day = clock.day_index();

        let scale = self.parameters.render_scale;
        for body in self.system.bodies.iter_mut() {
            body.record_history(day, scale);
        }

        trace!(elapsed_days = self.system.clock.elapsed_days(), "tick");
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.system.bodies.get(index)
    }

    pub fn elapsed_days(&self) -> f64 {
        self.system.clock.elapsed_days()
    }

    pub fn step_seconds(&self) -> f64 {
        self.parameters.step_seconds()
    }

    /// Takes effect on the next tick. Rejected values leave the step unchanged.
    pub fn set_step_seconds(&mut self, seconds: f64) -> Result<(), SimError> {
        match self.parameters.set_step_seconds(seconds) {
            Ok(()) => {
                debug!(step_seconds = seconds, "step size changed");
                Ok(())
            }
            Err(e) => {
                warn!(step_seconds = seconds, "step size rejected");
                Err(e)
            }
        }
    }

    /// Back to one simulated day per tick
    pub fn reset_step(&mut self) {
        self.parameters.reset_step();
        debug!(step_seconds = self.parameters.step_seconds(), "step size reset");
    }

    pub fn softening(&self) -> Softening {
        self.gravity.softening
    }

    pub fn render_scale(&self) -> f64 {
        self.parameters.render_scale
    }

    pub fn is_running(&self) -> bool {
        self.engine.state.is_running()
    }

    pub fn run_state(&self) -> RunState {
        self.engine.state
    }

    pub fn set_running(&mut self, running: bool) {
        let next = RunState::from(running);
        if next != self.engine.state {
            debug!(from = ?self.engine.state, to = ?next, "run state changed");
        }
        self.engine.state = next;
    }

    pub fn toggle_running(&mut self) {
        let next = self.engine.state.toggled();
        debug!(from = ?self.engine.state, to = ?next, "run state toggled");
        self.engine.state = next;
    }

    pub fn selected(&self) -> usize {
        self.engine.selected
    }

    pub fn selected_body(&self) -> Option<&Body> {
        self.body(self.engine.selected)
    }

    pub fn select(&mut self, index: usize) -> Result<(), SimError> {
        let count = self.system.bodies.len();
        if index >= count {
            warn!(index, count, "selection rejected");
            return Err(SimError::UnknownBody { index, count });
        }
        debug!(index, name = self.system.bodies[index].name(), "body selected");
        self.engine.selected = index;
        Ok(())
    }

    /// Scaled past positions, oldest first. Empty for unknown indices and
    /// for bodies without an orbital period.
    pub fn orbit_history(&self, index: usize) -> impl Iterator<Item = &NVec3> + '_ {
        self.system
            .bodies
            .get(index)
            .and_then(Body::trail)
            .into_iter()
            .flat_map(|trail| trail.iter())
    }

    pub fn has_non_finite_state(&self) -> bool {
        !self.system.bodies.iter().all(Body::is_finite)
    }
}
