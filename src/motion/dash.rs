//! Motion domain: timed dash abilities with cooldowns.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::motion::controller::CameraBasis;
use crate::motion::resources::{DashTuning, MotionTuning};
use crate::motion::zones::Capability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum DashKind {
    Forward,
    Backward,
    Downward,
}

impl DashKind {
    /// Activation priority when several dash buttons go down on one frame.
    pub const ALL: [DashKind; 3] = [DashKind::Forward, DashKind::Backward, DashKind::Downward];

    pub fn capability(self) -> Capability {
        match self {
            DashKind::Forward => Capability::ForwardDash,
            DashKind::Backward => Capability::BackwardDash,
            DashKind::Downward => Capability::DownwardDash,
        }
    }

    /// Downward dashes keep the current facing.
    pub fn reorients(self) -> bool {
        !matches!(self, DashKind::Downward)
    }

    /// Direction captured at activation. Uses the unflattened camera forward.
    pub fn direction(self, camera: &CameraBasis) -> Vec3 {
        match self {
            DashKind::Forward => camera.forward.normalize_or_zero(),
            DashKind::Backward => -camera.forward.normalize_or_zero(),
            DashKind::Downward => Vec3::NEG_Y,
        }
    }
}

/// Idle -> Active -> Idle, polled against the frame clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashTimer {
    pub kind: DashKind,
    pub active: bool,
    pub last_activated_at: f32,
    pub cooldown: f32,
    pub duration: f32,
    pub speed: f32,
    pub direction: Vec3,
    /// Facing yaw when the dash began, for reorientation
    pub start_yaw: f32,
}

impl DashTimer {
    pub fn new(kind: DashKind, tuning: &DashTuning) -> Self {
        Self {
            kind,
            active: false,
            // Never blocked by cooldown on the first activation
            last_activated_at: -tuning.cooldown,
            cooldown: tuning.cooldown,
            duration: tuning.duration,
            speed: tuning.speed,
            direction: Vec3::ZERO,
            start_yaw: 0.0,
        }
    }

    pub fn is_ready(&self, now: f32) -> bool {
        !self.active && now - self.last_activated_at >= self.cooldown
    }

    pub fn start(&mut self, now: f32, direction: Vec3, start_yaw: f32) {
        self.active = true;
        self.last_activated_at = now;
        self.direction = direction;
        self.start_yaw = start_yaw;
    }

    /// Deactivate once the duration has elapsed. Returns true on that frame.
    pub fn expire(&mut self, now: f32) -> bool {
        if self.active && now - self.last_activated_at >= self.duration {
            self.active = false;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    /// Fraction of the duration elapsed, in [0, 1].
    pub fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.last_activated_at) / self.duration).clamp(0.0, 1.0)
    }

    pub fn displacement(&self, dt: f32, scale: f32) -> Vec3 {
        self.direction.normalize_or_zero() * self.speed * scale * dt
    }

    pub fn cooldown_remaining(&self, now: f32) -> f32 {
        (self.cooldown - (now - self.last_activated_at)).max(0.0)
    }
}

/// The three dash variants, at most one of which is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashSet {
    pub forward: DashTimer,
    pub backward: DashTimer,
    pub downward: DashTimer,
}

impl DashSet {
    pub fn new(tuning: &MotionTuning) -> Self {
        Self {
            forward: DashTimer::new(DashKind::Forward, &tuning.forward_dash),
            backward: DashTimer::new(DashKind::Backward, &tuning.backward_dash),
            downward: DashTimer::new(DashKind::Downward, &tuning.downward_dash),
        }
    }

    pub fn get(&self, kind: DashKind) -> &DashTimer {
        match kind {
            DashKind::Forward => &self.forward,
            DashKind::Backward => &self.backward,
            DashKind::Downward => &self.downward,
        }
    }

    pub fn get_mut(&mut self, kind: DashKind) -> &mut DashTimer {
        match kind {
            DashKind::Forward => &mut self.forward,
            DashKind::Backward => &mut self.backward,
            DashKind::Downward => &mut self.downward,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DashTimer> {
        [&self.forward, &self.backward, &self.downward].into_iter()
    }

    pub fn active_kind(&self) -> Option<DashKind> {
        self.iter().find(|d| d.active).map(|d| d.kind)
    }

    pub fn any_active(&self) -> bool {
        self.active_kind().is_some()
    }

    /// Expire whichever dash is active. Returns its kind if it just ended.
    pub fn expire(&mut self, now: f32) -> Option<DashKind> {
        let kind = self.active_kind()?;
        self.get_mut(kind).expire(now).then_some(kind)
    }

    /// Start `kind` if no dash is running and its cooldown has elapsed.
    pub fn try_start(&mut self, kind: DashKind, now: f32, direction: Vec3, yaw: f32) -> bool {
        if self.any_active() || !self.get(kind).is_ready(now) {
            return false;
        }
        self.get_mut(kind).start(now, direction, yaw);
        true
    }

    pub fn cancel_active(&mut self) -> Option<DashKind> {
        let kind = self.active_kind()?;
        self.get_mut(kind).cancel().then_some(kind)
    }
}
