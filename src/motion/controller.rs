//! Motion domain: the per-frame controller tying every motion component together.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use std::collections::VecDeque;

use crate::motion::dash::{DashKind, DashSet};
use crate::motion::ground::{GroundSensor, GroundTransition};
use crate::motion::jump::{JumpLadder, JumpTier};
use crate::motion::locomotion::{Locomotion, LocomotionFrame, lerp_angle, yaw_toward};
use crate::motion::resources::{AirJumpTiming, MotionTuning};
use crate::motion::stamina::StaminaGauge;
use crate::motion::zones::{Capability, CapabilityFlags, ZoneResolver};

/// Undrained events beyond this are dropped oldest first.
pub const MAX_PENDING_EVENTS: usize = 64;

/// Reports whether the entity currently stands on something.
pub trait GroundProbe {
    fn probe(&mut self) -> bool;
}

impl<F: FnMut() -> bool> GroundProbe for F {
    fn probe(&mut self) -> bool {
        self()
    }
}

/// Moves the entity, returning the displacement actually applied.
pub trait MovePrimitive {
    fn move_by(&mut self, displacement: Vec3) -> Vec3;
}

impl<F: FnMut(Vec3) -> Vec3> MovePrimitive for F {
    fn move_by(&mut self, displacement: Vec3) -> Vec3 {
        self(displacement)
    }
}

/// World-space camera axes. Locomotion flattens them onto the ground plane.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl Default for CameraBasis {
    fn default() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }
}

/// Input snapshot for one frame. Button fields ending in `pressed` are edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub dt: f32,
    /// Monotonic time in seconds
    pub now: f32,
    pub move_axis: Vec2,
    pub run_held: bool,
    pub jump_pressed: bool,
    pub forward_dash_pressed: bool,
    pub backward_dash_pressed: bool,
    pub downward_dash_pressed: bool,
    pub forward_run_held: bool,
    pub crouch_held: bool,
    pub camera: CameraBasis,
    pub position: Vec3,
    /// Gate for the backward dash; `None` always permits
    pub equipment_active: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionEvent {
    Landed,
    LeftGround,
    Jumped(JumpTier),
    DashStarted(DashKind),
    DashEnded(DashKind),
    CapabilityUnlocked(Capability),
    SpeedBoostChanged(bool),
    StaminaRestored { amount: f32 },
    StaminaDecayStopped,
}

impl Message for MotionEvent {}

/// Velocities and ground timing, mutated only inside [`MotionController::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    pub horizontal_velocity: Vec3,
    /// Negative is falling
    pub vertical_velocity: f32,
    pub ground: GroundSensor,
    pub facing_yaw: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameOutcome {
    pub requested: Vec3,
    pub applied: Vec3,
}

#[derive(Component, Debug, Clone)]
pub struct MotionController {
    tuning: MotionTuning,
    state: MotionState,
    capabilities: CapabilityFlags,
    stamina: StaminaGauge,
    ladder: JumpLadder,
    dashes: DashSet,
    locomotion: Locomotion,
    zones: ZoneResolver,
    speed_boost_active: bool,
    special_jump_active: bool,
    in_crouch_zone: bool,
    events: VecDeque<MotionEvent>,
}

impl MotionController {
    pub fn new(tuning: MotionTuning, zones: ZoneResolver) -> Self {
        let capabilities = tuning.capabilities;
        Self {
            state: MotionState::default(),
            stamina: StaminaGauge::new(&tuning.stamina),
            ladder: JumpLadder::new(&capabilities),
            dashes: DashSet::new(&tuning),
            locomotion: Locomotion::default(),
            capabilities,
            zones,
            speed_boost_active: false,
            special_jump_active: false,
            in_crouch_zone: false,
            events: VecDeque::new(),
            tuning,
        }
    }

    /// Advance one frame and issue exactly one move through `mover`.
    pub fn tick<P, M>(&mut self, input: &FrameInput, probe: &mut P, mover: &mut M) -> FrameOutcome
    where
        P: GroundProbe,
        M: MovePrimitive,
    {
        let now = input.now;
        let dt = input.dt.max(0.0);

        self.update_ground(probe.probe(), now);

        if self.stamina.tick(dt) {
            self.emit(MotionEvent::StaminaDecayStopped);
        }

        self.resolve_zones(input.position);
        let scale = self.stamina.multiplier();

        if let Some(kind) = self.dashes.expire(now) {
            debug!("{:?} dash ended at t={:.3}", kind, now);
            self.emit(MotionEvent::DashEnded(kind));
        }
        self.try_start_dash(input, now);
        let dashing = self.dashes.active_kind();

        if !self.state.ground.grounded {
            let mut gravity = self.tuning.gravity;
            if input.run_held {
                gravity *= self.tuning.gravity_multiplier_on_sprint;
            }
            self.state.vertical_velocity -= gravity * dt;
        }

        if input.jump_pressed {
            self.try_jump(now, scale);
        }

        if self.special_jump_active {
            self.state.vertical_velocity = self.tuning.special_jump_force * scale;
            self.state.ground.leave_ground();
        }

        let requested = match dashing {
            Some(kind) => self.dash_displacement(kind, now, dt, scale),
            None => self.locomotion_displacement(input, dt, scale),
        };

        let applied = mover.move_by(requested);
        FrameOutcome { requested, applied }
    }

    fn update_ground(&mut self, probed: bool, now: f32) {
        match self.state.ground.update(probed, now) {
            GroundTransition::Landed => {
                self.emit(MotionEvent::Landed);
                if self.tuning.dash_cancels_on_land {
                    if let Some(kind) = self.dashes.cancel_active() {
                        debug!("{:?} dash cancelled by landing", kind);
                        self.emit(MotionEvent::DashEnded(kind));
                    }
                }
            }
            GroundTransition::LeftGround => self.emit(MotionEvent::LeftGround),
            GroundTransition::Steady => {}
        }

        if self.state.ground.grounded {
            self.ladder.on_landed(&self.capabilities);
            if self.state.vertical_velocity < 0.0 {
                self.state.vertical_velocity = self.tuning.resting_vertical_velocity;
            }
        }
    }

    fn resolve_zones(&mut self, position: Vec3) {
        let report = self.zones.resolve(
            position,
            &mut self.capabilities,
            self.tuning.collectibles_consumed,
        );

        for capability in &report.unlocked {
            debug!("Unlock zone entered: {}", capability.label());
            self.emit(MotionEvent::CapabilityUnlocked(*capability));
        }
        if !report.unlocked.is_empty() {
            self.ladder.sync(&self.capabilities);
        }

        if report.speed_boost != self.speed_boost_active {
            self.speed_boost_active = report.speed_boost;
            self.emit(MotionEvent::SpeedBoostChanged(report.speed_boost));
        }

        if report.special_jump && !self.special_jump_active {
            self.emit(MotionEvent::Jumped(JumpTier::Special));
        }
        self.special_jump_active = report.special_jump;
        self.in_crouch_zone = report.in_crouch_zone;

        if report.stamina_pickup {
            let amount = self.stamina.collect();
            if amount > 0.0 {
                self.emit(MotionEvent::StaminaRestored { amount });
            }
        }
    }

    fn try_start_dash(&mut self, input: &FrameInput, now: f32) {
        for kind in DashKind::ALL {
            let pressed = match kind {
                DashKind::Forward => input.forward_dash_pressed,
                DashKind::Backward => input.backward_dash_pressed,
                DashKind::Downward => input.downward_dash_pressed,
            };
            if !pressed || !self.capabilities.get(kind.capability()) {
                continue;
            }
            if kind == DashKind::Backward && input.equipment_active == Some(false) {
                continue;
            }

            let direction = kind.direction(&input.camera);
            if self
                .dashes
                .try_start(kind, now, direction, self.state.facing_yaw)
            {
                debug!("{:?} dash started at t={:.3}", kind, now);
                self.emit(MotionEvent::DashStarted(kind));
                return;
            }
        }
    }

    fn try_jump(&mut self, now: f32, scale: f32) {
        if self.tuning.air_jump_timing == AirJumpTiming::SincePress {
            self.state.ground.stamp_jump_input(now);
        }

        let Some(tier) = self.ladder.try_activate(
            now,
            &self.state.ground,
            &self.capabilities,
            self.tuning.grace_window,
        ) else {
            return;
        };

        let force = match tier {
            JumpTier::Ground => self.tuning.jump_force,
            JumpTier::Double => self.tuning.double_jump_force,
            JumpTier::Triple => self.tuning.triple_jump_force,
            JumpTier::Special => self.tuning.special_jump_force,
        };
        self.state.vertical_velocity = force * scale;
        self.state.ground.leave_ground();
        debug!(
            "{:?} jump at t={:.3}, charges remaining={}",
            tier,
            now,
            self.ladder.remaining()
        );
        self.emit(MotionEvent::Jumped(tier));
    }

    fn dash_displacement(&mut self, kind: DashKind, now: f32, dt: f32, scale: f32) -> Vec3 {
        let dash = self.dashes.get(kind);
        if self.tuning.dash_reorients && kind.reorients() {
            if let Some(target) = yaw_toward(dash.direction) {
                self.state.facing_yaw = lerp_angle(dash.start_yaw, target, dash.progress(now));
            }
        }
        dash.displacement(dt, scale)
    }

    fn locomotion_displacement(&mut self, input: &FrameInput, dt: f32, scale: f32) -> Vec3 {
        let crouch_allowed = self.tuning.crouch_run_enabled
            && self.capabilities.can_crouch_run
            && (!self.tuning.crouch_run_requires_zone || self.in_crouch_zone);

        let frame = LocomotionFrame {
            dt,
            move_axis: input.move_axis,
            run_held: input.run_held,
            grounded: self.state.ground.grounded,
            camera: input.camera,
            stamina: scale,
            speed_boost: self.speed_boost_active,
            forward_run: input.forward_run_held && self.capabilities.can_forward_run,
            crouch_run: input.crouch_held && crouch_allowed,
        };

        let horizontal =
            self.locomotion
                .step(&mut self.state.horizontal_velocity, &frame, &self.tuning);
        if let Some(yaw) = yaw_toward(horizontal) {
            self.state.facing_yaw = yaw;
        }

        (horizontal + Vec3::Y * self.state.vertical_velocity) * dt
    }

    fn emit(&mut self, event: MotionEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Refill stamina and re-arm its decay.
    pub fn reset_stamina(&mut self) {
        self.stamina.reset(self.tuning.stamina.decay_enabled);
    }

    /// Grant a capability outside of zone resolution (debug tools, scripted rewards).
    pub fn grant(&mut self, capability: Capability) -> bool {
        let newly = self.capabilities.grant(capability);
        if newly {
            self.ladder.sync(&self.capabilities);
            self.emit(MotionEvent::CapabilityUnlocked(capability));
        }
        newly
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = MotionEvent> + '_ {
        self.events.drain(..)
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn tuning(&self) -> &MotionTuning {
        &self.tuning
    }

    pub fn capabilities(&self) -> &CapabilityFlags {
        &self.capabilities
    }

    pub fn stamina(&self) -> &StaminaGauge {
        &self.stamina
    }

    pub fn stamina_fraction(&self) -> f32 {
        self.stamina.multiplier()
    }

    pub fn jump_ladder(&self) -> &JumpLadder {
        &self.ladder
    }

    /// (remaining, max) jump charges.
    pub fn jump_charges(&self) -> (u8, u8) {
        (self.ladder.remaining(), self.ladder.max_charges())
    }

    pub fn dashes(&self) -> &DashSet {
        &self.dashes
    }

    pub fn active_dash(&self) -> Option<DashKind> {
        self.dashes.active_kind()
    }

    pub fn locomotion(&self) -> &Locomotion {
        &self.locomotion
    }

    pub fn zones(&self) -> &ZoneResolver {
        &self.zones
    }

    pub fn speed_boost_active(&self) -> bool {
        self.speed_boost_active
    }

    pub fn special_jump_active(&self) -> bool {
        self.special_jump_active
    }

    pub fn facing_yaw(&self) -> f32 {
        self.state.facing_yaw
    }
}
