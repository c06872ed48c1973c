//! Motion domain: smoothed horizontal velocity and fixed-direction run modes.

use bevy::math::FloatExt;
use bevy::prelude::*;

use crate::motion::controller::CameraBasis;
use crate::motion::resources::{MotionTuning, RunModeBlend, RunModeTuning};

/// Below this speed a released run mode disengages.
const RUN_MODE_SETTLE_SPEED: f32 = 0.01;

/// Interpolation factor for exponential approach over one frame.
pub fn approach_factor(dt: f32, time_constant: f32) -> f32 {
    if dt <= 0.0 {
        0.0
    } else if time_constant <= 0.0 {
        1.0
    } else {
        (dt / time_constant).min(1.0)
    }
}

/// Project onto the ground plane and normalize; zero if degenerate.
pub fn flatten(direction: Vec3) -> Vec3 {
    Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero()
}

/// Yaw that rotates -Z onto the horizontal part of `direction`.
pub fn yaw_toward(direction: Vec3) -> Option<f32> {
    let flat = flatten(direction);
    (flat != Vec3::ZERO).then(|| f32::atan2(-flat.x, -flat.z))
}

/// Shortest-arc angle interpolation.
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let tau = std::f32::consts::TAU;
    let delta = (to - from + std::f32::consts::PI).rem_euclid(tau) - std::f32::consts::PI;
    from + delta * t.clamp(0.0, 1.0)
}

/// A camera-forward locomotion mode with its own smoothed speed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunMode {
    pub speed: f32,
    pub engaged: bool,
}

impl RunMode {
    /// Approach `target` while held and zero once released. The mode stays
    /// engaged until the speed settles so releases decelerate smoothly.
    pub fn update(&mut self, held: bool, target: f32, tuning: &RunModeTuning, dt: f32) -> f32 {
        if held {
            self.engaged = true;
        }
        if !self.engaged {
            return 0.0;
        }

        let (goal, time_constant) = if held {
            (target, tuning.acceleration_time)
        } else {
            (0.0, tuning.deceleration_time)
        };
        self.speed = self.speed.lerp(goal, approach_factor(dt, time_constant));

        if !held && self.speed <= RUN_MODE_SETTLE_SPEED {
            self.speed = 0.0;
            self.engaged = false;
        }
        self.speed
    }

    pub fn disengage(&mut self) {
        self.speed = 0.0;
        self.engaged = false;
    }
}

/// Everything the integrator reads for one frame.
#[derive(Debug, Clone, Copy)]
pub struct LocomotionFrame {
    pub dt: f32,
    pub move_axis: Vec2,
    pub run_held: bool,
    pub grounded: bool,
    pub camera: CameraBasis,
    pub stamina: f32,
    pub speed_boost: bool,
    pub forward_run: bool,
    pub crouch_run: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Locomotion {
    pub forward_run: RunMode,
    pub crouch_run: RunMode,
}

impl Locomotion {
    /// Target for the smoothed stick velocity.
    pub fn target_velocity(frame: &LocomotionFrame, tuning: &MotionTuning) -> Vec3 {
        let forward = flatten(frame.camera.forward);
        let right = flatten(frame.camera.right);
        let wish = (right * frame.move_axis.x + forward * frame.move_axis.y).normalize_or_zero();

        let mut speed = tuning.base_speed * frame.stamina;
        if frame.speed_boost {
            speed *= tuning.speed_boost_factor;
        }
        if frame.run_held {
            speed *= tuning.run_multiplier;
        }
        wish * speed
    }

    /// Advance the run modes and the smoothed velocity, returning this
    /// frame's horizontal velocity.
    ///
    /// Under `Replace`, stick input while no mode is held hands a decelerating
    /// mode's velocity back to the smoothed velocity.
    pub fn step(
        &mut self,
        horizontal: &mut Vec3,
        frame: &LocomotionFrame,
        tuning: &MotionTuning,
    ) -> Vec3 {
        let forward = flatten(frame.camera.forward);
        let replace = tuning.run_mode_blend == RunModeBlend::Replace;

        let held = frame.forward_run || frame.crouch_run;
        if replace && !held && self.run_mode_engaged() && frame.move_axis != Vec2::ZERO {
            *horizontal = forward * (self.forward_run.speed + self.crouch_run.speed);
            self.forward_run.disengage();
            self.crouch_run.disengage();
        }

        let forward_speed = self.forward_run.update(
            frame.forward_run,
            tuning.forward_run.speed * frame.stamina,
            &tuning.forward_run,
            frame.dt,
        );
        let crouch_speed = self.crouch_run.update(
            frame.crouch_run,
            tuning.crouch_run.speed * frame.stamina,
            &tuning.crouch_run,
            frame.dt,
        );
        let fixed = forward * (forward_speed + crouch_speed);

        let time_constant = if frame.grounded {
            tuning.acceleration_time
        } else {
            tuning.deceleration_time
        };
        let target = Self::target_velocity(frame, tuning);
        *horizontal = horizontal.lerp(target, approach_factor(frame.dt, time_constant));

        match (self.run_mode_engaged(), replace) {
            (true, true) => fixed,
            (true, false) => *horizontal + fixed,
            (false, _) => *horizontal,
        }
    }

    pub fn run_mode_engaged(&self) -> bool {
        self.forward_run.engaged || self.crouch_run.engaged
    }
}
