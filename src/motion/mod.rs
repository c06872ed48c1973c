//! Motion domain: per-frame character controller and its Bevy wiring.
//!
//! The core types are plain structs driven by [`MotionController::tick`];
//! the systems in this module only translate keyboard, camera, and physics
//! queries into a [`FrameInput`] and back.

mod bootstrap;
mod components;
mod controller;
mod dash;
mod ground;
mod jump;
mod locomotion;
mod resources;
mod stamina;
pub(crate) mod systems;
mod zones;

pub use components::{BackwardDashGear, FollowCamera, FootProbe, GameLayer, Ground, Player};
pub use controller::{
    CameraBasis, FrameInput, FrameOutcome, GroundProbe, MAX_PENDING_EVENTS, MotionController,
    MotionEvent, MotionState, MovePrimitive,
};
pub use dash::{DashKind, DashSet, DashTimer};
pub use ground::{GroundSensor, GroundTransition};
pub use jump::{JumpLadder, JumpTier, max_charges};
pub use locomotion::{Locomotion, LocomotionFrame, RunMode, approach_factor, flatten};
pub use resources::{
    AirJumpTiming, DashTuning, MotionInput, MotionTuning, RunModeBlend, RunModeTuning,
    StaminaTuning,
};
pub use stamina::StaminaGauge;
pub use zones::{
    Capability, CapabilityFlags, TriggerVolume, UnlockZone, VolumeSet, ZoneReport, ZoneResolver,
};

use bevy::prelude::*;

use crate::motion::bootstrap::{spawn_camera, spawn_player};
use crate::motion::systems::{
    drive_controller, follow_player, log_motion_events, orbit_camera, read_input,
};

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>()
            .init_resource::<MotionInput>()
            .init_resource::<CameraBasis>()
            .add_message::<MotionEvent>()
            .add_systems(Startup, (spawn_camera, spawn_player))
            .add_systems(
                Update,
                (
                    read_input,
                    orbit_camera,
                    drive_controller,
                    follow_player,
                    log_motion_events,
                )
                    .chain(),
            );
    }
}
