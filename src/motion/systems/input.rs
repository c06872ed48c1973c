//! Motion domain: input sampling for the controller.

use bevy::prelude::*;

use crate::motion::MotionInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MotionInput>) {
    // Strafe axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        x += 1.0;
    }

    // Forward axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.run_held = keyboard.pressed(KeyCode::ShiftLeft);
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
    input.forward_dash_just_pressed = keyboard.just_pressed(KeyCode::KeyQ);
    input.backward_dash_just_pressed = keyboard.just_pressed(KeyCode::KeyR);
    input.downward_dash_just_pressed = keyboard.just_pressed(KeyCode::KeyE);
    // Forward-run shares the forward key; it only engages once unlocked
    input.forward_run_held = keyboard.pressed(KeyCode::KeyW);
    input.crouch_held = keyboard.pressed(KeyCode::KeyC);
}
