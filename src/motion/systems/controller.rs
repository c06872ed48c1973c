//! Motion domain: per-frame controller drive and event fan-out.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::motion::systems::collisions::{RayGroundProbe, ShapeCastMover};
use crate::motion::{
    BackwardDashGear, CameraBasis, FootProbe, FrameInput, MotionController, MotionEvent,
    MotionInput, Player,
};

pub(crate) fn drive_controller(
    time: Res<Time>,
    input: Res<MotionInput>,
    camera: Res<CameraBasis>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            &mut Transform,
            &Collider,
            &FootProbe,
            &mut MotionController,
            Option<&BackwardDashGear>,
        ),
        With<Player>,
    >,
    mut events: MessageWriter<MotionEvent>,
) {
    for (mut transform, collider, foot, mut controller, gear) in &mut query {
        let frame = FrameInput {
            dt: time.delta_secs(),
            now: time.elapsed_secs(),
            move_axis: input.axis,
            run_held: input.run_held,
            jump_pressed: input.jump_just_pressed,
            forward_dash_pressed: input.forward_dash_just_pressed,
            backward_dash_pressed: input.backward_dash_just_pressed,
            downward_dash_pressed: input.downward_dash_just_pressed,
            forward_run_held: input.forward_run_held,
            crouch_held: input.crouch_held,
            camera: *camera,
            position: transform.translation,
            equipment_active: gear.map(|g| g.active),
        };

        let mut probe = RayGroundProbe {
            spatial_query: &spatial_query,
            origin: transform.translation,
            foot: *foot,
        };
        let mut mover = ShapeCastMover {
            spatial_query: &spatial_query,
            collider,
            transform: &mut *transform,
        };

        controller.tick(&frame, &mut probe, &mut mover);

        transform.rotation = Quat::from_rotation_y(controller.facing_yaw());
        events.write_batch(controller.drain_events());
    }
}

pub(crate) fn log_motion_events(mut events: MessageReader<MotionEvent>) {
    for event in events.read() {
        match event {
            MotionEvent::CapabilityUnlocked(capability) => {
                info!("Capability unlocked: {}", capability.label());
            }
            MotionEvent::StaminaDecayStopped => info!("Stamina decay settled"),
            other => debug!("Motion event: {:?}", other),
        }
    }
}
