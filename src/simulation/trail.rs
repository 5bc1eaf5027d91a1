//! Bounded orbit history for display
//!
//! A fixed-capacity ring buffer of scaled positions, one slot per simulated
//! day of the body's orbital period. Sample `day` is written to slot
//! `day % capacity`; once a day index reaches the capacity the buffer has
//! wrapped and the trail should be drawn as a closed loop.
//!
//! Steps longer than a day skip day indices. Each slot remembers the day it
//! was written for, so a slot left over from an earlier lap is not read as
//! part of the current window.

use crate::simulation::states::NVec3;

#[derive(Debug, Clone)]
pub struct OrbitTrail {
    slots: Vec<Option<(u64, NVec3)>>,
    last_day: Option<u64>,
}

impl OrbitTrail {
    /// `None` for a zero capacity, bodies without a period keep no trail
    pub fn new(capacity: usize) -> Option<Self> {
        if capacity == 0 {
            return None;
        }
        Some(Self {
            slots: vec![None; capacity],
            last_day: None,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of samples within the last `capacity` days
    pub fn len(&self) -> usize {
        self.samples().count()
    }

    pub fn is_empty(&self) -> bool {
        self.last_day.is_none()
    }

    /// True once the day index has gone past the end of the buffer
    pub fn is_closed(&self) -> bool {
        matches!(self.last_day, Some(day) if day >= self.slots.len() as u64)
    }

    pub fn last_day(&self) -> Option<u64> {
        self.last_day
    }

    pub fn slot_for(&self, day: u64) -> usize {
        (day % self.slots.len() as u64) as usize
    }

    /// Write `position` for `day`, overwriting whatever that slot held
    pub fn record(&mut self, day: u64, position: NVec3) {
        let slot = self.slot_for(day);
        self.slots[slot] = Some((day, position));
        self.last_day = Some(day);
    }

    /// Checked read of a raw slot
    pub fn get(&self, slot: usize) -> Option<&NVec3> {
        self.slots.get(slot).and_then(|s| s.as_ref()).map(|(_, x)| x)
    }

    /// `(day, position)` pairs from oldest to newest, covering the last
    /// `capacity` days up to and including the newest sample
    pub fn samples(&self) -> impl Iterator<Item = (u64, &NVec3)> + '_ {
        let cap = self.slots.len() as u64;
        // days (last - cap, last] map one-to-one onto the slots, starting at
        // the slot after the newest one
        let (first, last) = match self.last_day {
            Some(last) => ((last + 1).saturating_sub(cap), Some(last)),
            None => (0, None),
        };

        (first..first + cap).filter_map(move |day| match (&self.slots[self.slot_for(day)], last) {
            (Some((written, x)), Some(last)) if *written == day && day <= last => Some((day, x)),
            _ => None,
        })
    }

    /// Positions from oldest to newest, at most `capacity` of them
    pub fn iter(&self) -> impl Iterator<Item = &NVec3> + '_ {
        self.samples().map(|(_, x)| x)
    }

    pub fn newest(&self) -> Option<&NVec3> {
        self.last_day.and_then(|day| self.get(self.slot_for(day)))
    }
}
