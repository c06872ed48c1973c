//! Motion domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::motion::zones::CapabilityFlags;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashTuning {
    pub speed: f32,
    pub duration: f32,
    pub cooldown: f32,
}

impl Default for DashTuning {
    fn default() -> Self {
        Self {
            speed: 10.0,
            duration: 0.5,
            cooldown: 2.0,
        }
    }
}

/// A fixed-direction locomotion mode (forward-run, crouch-run).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RunModeTuning {
    pub speed: f32,
    pub acceleration_time: f32,
    pub deceleration_time: f32,
}

impl Default for RunModeTuning {
    fn default() -> Self {
        Self {
            speed: 40.0,
            acceleration_time: 1.0,
            deceleration_time: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StaminaTuning {
    pub max: f32,
    /// Seconds for decay to remove `drown_fraction` of the maximum
    pub drown_time: f32,
    /// Fraction of the maximum lost over `drown_time`; also the decay floor
    pub drown_fraction: f32,
    /// Amount a collectible restores
    pub restore_amount: f32,
    pub decay_enabled: bool,
}

impl Default for StaminaTuning {
    fn default() -> Self {
        Self {
            max: 100.0,
            drown_time: 5.0,
            drown_fraction: 0.5,
            restore_amount: 25.0,
            decay_enabled: true,
        }
    }
}

/// How forward-run and crouch-run combine with stick locomotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum RunModeBlend {
    /// The run mode is the only horizontal contribution while engaged
    #[default]
    Replace,
    /// The run mode is added on top of the smoothed stick velocity
    Add,
}

/// Which timestamp tiered jumps measure their window from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum AirJumpTiming {
    /// Only the stamp taken when the entity walks off a ledge
    #[default]
    CoyoteStamp,
    /// Every jump press re-stamps, so tiered jumps fire any time while airborne
    SincePress,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionTuning {
    pub base_speed: f32,
    pub run_multiplier: f32,
    pub acceleration_time: f32,
    pub deceleration_time: f32,
    pub gravity: f32,
    /// Vertical velocity held while grounded
    pub resting_vertical_velocity: f32,
    pub grace_window: f32,
    pub jump_force: f32,
    pub double_jump_force: f32,
    pub triple_jump_force: f32,
    pub special_jump_force: f32,
    pub speed_boost_factor: f32,
    pub forward_dash: DashTuning,
    pub backward_dash: DashTuning,
    pub downward_dash: DashTuning,
    pub forward_run: RunModeTuning,
    pub crouch_run: RunModeTuning,
    pub stamina: StaminaTuning,
    /// Capabilities the entity starts with
    pub capabilities: CapabilityFlags,
    pub crouch_run_enabled: bool,
    /// Gravity scale applied while the run modifier is held
    pub gravity_multiplier_on_sprint: f32,
    pub dash_cancels_on_land: bool,
    pub run_mode_blend: RunModeBlend,
    pub air_jump_timing: AirJumpTiming,
    /// Remove a stamina collectible after it restores once
    pub collectibles_consumed: bool,
    /// Crouch-run only engages inside a crouch-forward zone
    pub crouch_run_requires_zone: bool,
    pub dash_reorients: bool,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            base_speed: 6.0,
            run_multiplier: 2.0,
            acceleration_time: 0.1,
            deceleration_time: 0.25,
            gravity: 30.0,
            resting_vertical_velocity: -0.5,
            grace_window: 0.1,
            jump_force: 20.0,
            double_jump_force: 20.0,
            triple_jump_force: 25.0,
            special_jump_force: 30.0,
            speed_boost_factor: 2.0,
            forward_dash: DashTuning::default(),
            backward_dash: DashTuning::default(),
            downward_dash: DashTuning::default(),
            forward_run: RunModeTuning::default(),
            crouch_run: RunModeTuning::default(),
            stamina: StaminaTuning::default(),
            capabilities: CapabilityFlags::default(),
            crouch_run_enabled: true,
            gravity_multiplier_on_sprint: 1.0,
            dash_cancels_on_land: false,
            run_mode_blend: RunModeBlend::default(),
            air_jump_timing: AirJumpTiming::default(),
            collectibles_consumed: false,
            crouch_run_requires_zone: false,
            dash_reorients: true,
        }
    }
}

impl MotionTuning {
    /// Clamp values that would otherwise need checks at every use.
    /// Applied once when tuning is loaded.
    pub fn sanitized(mut self) -> Self {
        fn non_negative(value: &mut f32) {
            if !value.is_finite() || *value < 0.0 {
                *value = 0.0;
            }
        }

        for value in [
            &mut self.base_speed,
            &mut self.run_multiplier,
            &mut self.acceleration_time,
            &mut self.deceleration_time,
            &mut self.gravity,
            &mut self.grace_window,
            &mut self.jump_force,
            &mut self.double_jump_force,
            &mut self.triple_jump_force,
            &mut self.special_jump_force,
            &mut self.speed_boost_factor,
            &mut self.gravity_multiplier_on_sprint,
        ] {
            non_negative(value);
        }

        for dash in [
            &mut self.forward_dash,
            &mut self.backward_dash,
            &mut self.downward_dash,
        ] {
            non_negative(&mut dash.speed);
            non_negative(&mut dash.duration);
            non_negative(&mut dash.cooldown);
        }

        for mode in [&mut self.forward_run, &mut self.crouch_run] {
            non_negative(&mut mode.speed);
            non_negative(&mut mode.acceleration_time);
            non_negative(&mut mode.deceleration_time);
        }

        non_negative(&mut self.stamina.max);
        non_negative(&mut self.stamina.drown_time);
        non_negative(&mut self.stamina.restore_amount);
        self.stamina.drown_fraction = if self.stamina.drown_fraction.is_finite() {
            self.stamina.drown_fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };

        if !self.resting_vertical_velocity.is_finite() || self.resting_vertical_velocity > 0.0 {
            self.resting_vertical_velocity = 0.0;
        }

        self
    }

    /// Peak height of a ground jump at full stamina: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * self.gravity)
    }

    /// Height reachable by chaining every unlocked jump tier at its apex.
    /// Tiered jumps only fire inside the grace window, so this is an upper bound.
    pub fn max_reachable_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        let height = |force: f32| force * force / (2.0 * self.gravity);
        let mut total = self.single_jump_height();
        if self.capabilities.can_double_jump {
            total += height(self.double_jump_force);
        }
        if self.capabilities.can_triple_jump {
            total += height(self.triple_jump_force);
        }
        total
    }
}

/// Per-frame button and axis state sampled from the keyboard.
#[derive(Resource, Debug, Default)]
pub struct MotionInput {
    pub axis: Vec2,
    pub run_held: bool,
    pub jump_just_pressed: bool,
    pub forward_dash_just_pressed: bool,
    pub backward_dash_just_pressed: bool,
    pub downward_dash_just_pressed: bool,
    pub forward_run_held: bool,
    pub crouch_held: bool,
}
