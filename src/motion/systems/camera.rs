//! Motion domain: orbit camera and the camera basis fed to the controller.

use bevy::prelude::*;

use crate::motion::{CameraBasis, FollowCamera, Player};

const ORBIT_SPEED: f32 = 2.2;
const PITCH_LIMIT: f32 = 1.2;

/// Arrow keys orbit the camera; the basis the controller reads follows it.
pub(crate) fn orbit_camera(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cameras: Query<(&mut FollowCamera, &Transform)>,
    mut basis: ResMut<CameraBasis>,
) {
    let dt = time.delta_secs();

    for (mut rig, transform) in &mut cameras {
        if keyboard.pressed(KeyCode::ArrowLeft) {
            rig.yaw += ORBIT_SPEED * dt;
        }
        if keyboard.pressed(KeyCode::ArrowRight) {
            rig.yaw -= ORBIT_SPEED * dt;
        }
        if keyboard.pressed(KeyCode::ArrowUp) {
            rig.pitch = (rig.pitch - ORBIT_SPEED * 0.5 * dt).max(-PITCH_LIMIT);
        }
        if keyboard.pressed(KeyCode::ArrowDown) {
            rig.pitch = (rig.pitch + ORBIT_SPEED * 0.5 * dt).min(0.0);
        }

        *basis = CameraBasis {
            forward: transform.forward().as_vec3(),
            right: transform.right().as_vec3(),
        };
    }
}

/// Place the camera behind the player at the rig's yaw and pitch.
pub(crate) fn follow_player(
    player: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
) {
    let Ok(target) = player.single() else {
        return;
    };

    for (rig, mut transform) in &mut cameras {
        let rotation = Quat::from_euler(EulerRot::YXZ, rig.yaw, rig.pitch, 0.0);
        let focus = target.translation + Vec3::Y * 1.2;
        transform.translation = focus + rotation * Vec3::Z * rig.distance;
        transform.look_at(focus, Vec3::Y);
    }
}
