//! Simulated time since start, counted in days.

use crate::simulation::params::SECONDS_PER_DAY;

/// Fraction of a day below which the clock counts as sitting on a boundary
const DAY_TOLERANCE: f64 = 1.0e-9;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    // seconds, not days: whole-second steps sum exactly
    elapsed_seconds: f64,
}

impl SimulationClock {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    pub fn elapsed_days(&self) -> f64 {
        self.elapsed_seconds / SECONDS_PER_DAY
    }

    /// Move the clock forward by one step of `step_seconds`
    pub fn advance(&mut self, step_seconds: f64) {
        self.elapsed_seconds += step_seconds;
    }

    /// Zero-based index of the simulated day the clock is currently in.
    ///
    /// Exactly one day elapsed gives index 0, so the first sample of a trail
    /// lands in slot 0. A clock within `DAY_TOLERANCE` past a day boundary
    /// still belongs to the day that just ended.
    pub fn day_index(&self) -> u64 {
        let days = (self.elapsed_days() - DAY_TOLERANCE).ceil().max(0.0);
        // ceil of a non-negative finite value, always fits
        (days as u64).saturating_sub(1)
    }
}
