//! Motion domain: stamina gauge scaling every movement force.

use bevy::prelude::*;

use crate::motion::resources::StaminaTuning;

/// Depleting scalar whose fill fraction multiplies speeds and jump forces.
///
/// Passive decay is a one-way ratchet: once `current` reaches the floor
/// (`max * drown_fraction`) decay stops and only [`StaminaGauge::reset`]
/// arms it again. Restoring stamina does not re-arm decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaminaGauge {
    current: f32,
    max: f32,
    drown_time: f32,
    drown_fraction: f32,
    restore_amount: f32,
    decaying: bool,
}

impl StaminaGauge {
    pub fn new(tuning: &StaminaTuning) -> Self {
        Self {
            current: tuning.max,
            max: tuning.max,
            drown_time: tuning.drown_time,
            drown_fraction: tuning.drown_fraction,
            restore_amount: tuning.restore_amount,
            decaying: tuning.decay_enabled,
        }
    }

    /// Advance passive decay. Returns true on the tick decay stops.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.decaying || dt <= 0.0 || self.drown_time <= 0.0 {
            return false;
        }

        let loss = dt / self.drown_time * (self.max * self.drown_fraction);
        self.current = (self.current - loss).clamp(0.0, self.max);

        if self.current <= self.floor() {
            self.decaying = false;
            debug!(
                "Stamina decay stopped at {:.2}/{:.2}",
                self.current, self.max
            );
            return true;
        }
        false
    }

    pub fn restore(&mut self, amount: f32) {
        self.current = (self.current + amount).clamp(0.0, self.max);
    }

    /// Restore by the configured collectible amount.
    pub fn collect(&mut self) -> f32 {
        let before = self.current;
        self.restore(self.restore_amount);
        self.current - before
    }

    /// Refill and re-arm decay.
    pub fn reset(&mut self, decay: bool) {
        self.current = self.max;
        self.decaying = decay;
    }

    pub fn multiplier(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.current / self.max
    }

    pub fn floor(&self) -> f32 {
        self.max * self.drown_fraction
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_decaying(&self) -> bool {
        self.decaying
    }
}
