//! UI domain: tests for HUD formatting.

use bevy::prelude::*;

use super::{ability_readout, stamina_color};
use crate::motion::{Capability, FrameInput, MotionController, MotionTuning, ZoneResolver};

#[test]
fn test_stamina_color_endpoints() {
    assert_eq!(stamina_color(1.0), Color::srgb(0.2, 0.8, 0.3));
    assert_eq!(stamina_color(0.0), Color::srgb(0.9, 0.2, 0.2));
    assert_eq!(stamina_color(2.0), stamina_color(1.0));
}

#[test]
fn test_readout_lists_unlocked_abilities() {
    let mut controller = MotionController::new(MotionTuning::default(), ZoneResolver::default());
    let readout = ability_readout(&controller, 0.0);
    assert!(readout.starts_with("Jumps: 1/1"));
    assert!(readout.contains("Unlocked: none"));
    assert!(!readout.contains("dash"));

    controller.grant(Capability::DoubleJump);
    controller.grant(Capability::ForwardDash);
    let readout = ability_readout(&controller, 0.0);
    assert!(readout.contains("Forward dash: ready"));
    assert!(readout.contains("Unlocked: Double Jump, Forward Dash"));
}

#[test]
fn test_readout_shows_dash_cooldown() {
    let mut tuning = MotionTuning::default();
    tuning.capabilities.can_forward_dash = true;
    let mut controller = MotionController::new(tuning, ZoneResolver::default());

    let input = FrameInput {
        dt: 0.1,
        forward_dash_pressed: true,
        ..Default::default()
    };
    controller.tick(&input, &mut || true, &mut |d: Vec3| d);
    assert!(ability_readout(&controller, 0.0).contains("Forward dash: active"));

    let input = FrameInput {
        now: 1.0,
        dt: 0.1,
        ..Default::default()
    };
    controller.tick(&input, &mut || true, &mut |d: Vec3| d);
    assert!(ability_readout(&controller, 1.0).contains("Forward dash: 1.0s"));
}
