//! Motion domain: grounded/airborne tracking and grace-window timestamps.

use bevy::prelude::*;

/// Result of feeding one probe sample into the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    Steady,
    Landed,
    LeftGround,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroundSensor {
    pub grounded: bool,
    pub was_grounded: bool,
    pub last_grounded_at: Option<f32>,
    pub last_jump_input_at: Option<f32>,
}

impl GroundSensor {
    /// Record this frame's probe result.
    ///
    /// Every grounded frame refreshes `last_grounded_at`. Walking off a ledge
    /// stamps `last_jump_input_at`, which opens the coyote window that tiered
    /// jumps are measured against.
    pub fn update(&mut self, probed: bool, now: f32) -> GroundTransition {
        self.was_grounded = self.grounded;
        self.grounded = probed;

        if self.grounded {
            self.last_grounded_at = Some(now);
            if self.was_grounded {
                GroundTransition::Steady
            } else {
                debug!("Landed at t={:.3}", now);
                GroundTransition::Landed
            }
        } else if self.was_grounded {
            self.last_jump_input_at = Some(now);
            debug!("Left ground at t={:.3}", now);
            GroundTransition::LeftGround
        } else {
            GroundTransition::Steady
        }
    }

    pub fn within_ground_grace(&self, now: f32, window: f32) -> bool {
        self.last_grounded_at.is_some_and(|t| now - t <= window)
    }

    pub fn within_jump_grace(&self, now: f32, window: f32) -> bool {
        self.last_jump_input_at.is_some_and(|t| now - t <= window)
    }

    pub fn stamp_jump_input(&mut self, now: f32) {
        self.last_jump_input_at = Some(now);
    }

    /// Mark the entity airborne after an impulse. The next probe decides again.
    pub fn leave_ground(&mut self) {
        self.grounded = false;
    }
}
