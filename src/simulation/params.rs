//! Physical constants and runtime numerical parameters
//!
//! `Parameters` holds the settings the external layers may change while the
//! simulation runs:
//! - step size in simulated seconds per tick,
//! - render scale applied to positions stored in orbit trails

use crate::error::SimError;

/// Gravitational constant (m^3 kg^-1 s^-2), only used when a body gives no GM
pub const G: f64 = 6.673e-11;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Upper bound of the step size: two simulated days
pub const MAX_STEP_SECONDS: f64 = 2.0 * SECONDS_PER_DAY;

/// Astronomical unit (m)
pub const AU: f64 = 1.495_978_93e11;

/// Softening length added in quadrature to the separation (m)
pub const DEFAULT_SOFTENING_EPS: f64 = 4.0e6;

/// Metres to scene units for trail samples
pub const DEFAULT_RENDER_SCALE: f64 = 5.0e-10;

#[derive(Debug, Clone)]
pub struct Parameters {
    step_seconds: f64, // step size
    pub render_scale: f64, // scene scale for trails
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            step_seconds: SECONDS_PER_DAY,
            render_scale: DEFAULT_RENDER_SCALE,
        }
    }
}

impl Parameters {
    pub fn new(step_seconds: f64, render_scale: f64) -> Result<Self, SimError> {
        let mut params = Self { render_scale, ..Self::default() };
        params.set_step_seconds(step_seconds)?;
        Ok(params)
    }

    pub fn step_seconds(&self) -> f64 {
        self.step_seconds
    }

    /// Accepts only finite values in (0, MAX_STEP_SECONDS]
    pub fn set_step_seconds(&mut self, seconds: f64) -> Result<(), SimError> {
        validate_step(seconds)?;
        self.step_seconds = seconds;
        Ok(())
    }

    /// One simulated day per tick
    pub fn reset_step(&mut self) {
        self.step_seconds = SECONDS_PER_DAY;
    }
}

pub fn validate_step(seconds: f64) -> Result<(), SimError> {
    if seconds.is_finite() && seconds > 0.0 && seconds <= MAX_STEP_SECONDS {
        Ok(())
    } else {
        Err(SimError::InvalidStep { seconds })
    }
}
