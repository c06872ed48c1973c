//! Debug domain: tests for state snapshots and status messages.

use bevy::prelude::*;

use super::{DebugAction, DebugState, MotionSnapshot};
use crate::motion::{
    Capability, DashKind, FrameInput, MotionController, MotionTuning, TriggerVolume, UnlockZone,
    ZoneResolver,
};

fn dashing_controller() -> MotionController {
    let mut tuning = MotionTuning::default();
    tuning.stamina.decay_enabled = false;
    tuning.capabilities.can_forward_dash = true;
    let zones = ZoneResolver {
        unlocks: vec![UnlockZone::new(
            Capability::TripleJump,
            TriggerVolume::new(Vec3::new(20.0, 0.0, 0.0), Vec3::ONE),
        )],
        ..Default::default()
    };
    let mut controller = MotionController::new(tuning, zones);

    let input = FrameInput {
        dt: 0.1,
        forward_dash_pressed: true,
        ..Default::default()
    };
    controller.tick(&input, &mut || true, &mut |d: Vec3| d);
    controller
}

// -----------------------------------------------------------------------------
// Snapshot
// -----------------------------------------------------------------------------

#[test]
fn test_snapshot_captures_controller_state() {
    let controller = dashing_controller();
    let snapshot = MotionSnapshot::capture(3.5, Vec3::new(1.0, 2.0, 3.0), &controller, None);

    assert_eq!(snapshot.time, 3.5);
    assert_eq!(snapshot.position, [1.0, 2.0, 3.0]);
    assert!(snapshot.grounded);
    assert_eq!(snapshot.stamina, 100.0);
    assert!(!snapshot.stamina_decaying);
    assert_eq!(snapshot.jump_charges_remaining, 1);
    assert_eq!(snapshot.jump_charges_max, 1);
    assert_eq!(snapshot.active_dash, Some(DashKind::Forward));
    assert!(snapshot.capabilities.can_forward_dash);
    assert_eq!(snapshot.equipment_active, None);
    assert_eq!(snapshot.pending_unlocks, 1);
}

#[test]
fn test_snapshot_json_is_readable() {
    let controller = dashing_controller();
    let snapshot = MotionSnapshot::capture(0.0, Vec3::ZERO, &controller, Some(true));

    let json = snapshot.to_json().expect("snapshot serializes");
    assert!(json.contains("\"active_dash\": \"Forward\""));
    assert!(json.contains("\"can_forward_dash\": true"));

    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(parsed["jump_charges_max"], 1);
    assert_eq!(parsed["equipment_active"], true);
}

#[test]
fn test_overlay_text_summarizes_snapshot() {
    let controller = dashing_controller();
    let snapshot = MotionSnapshot::capture(0.0, Vec3::new(1.0, 0.5, -2.0), &controller, Some(false));
    let text = snapshot.overlay_text();

    assert!(text.contains("Pos: (1.0, 0.5, -2.0)"));
    assert!(text.contains("Jumps: 1/1"));
    assert!(text.contains("Dash: Forward"));
    assert!(text.contains("Gear: off"));
    assert!(text.contains("Pending unlocks: 1"));
    assert!(!text.contains("decaying"));
}

// -----------------------------------------------------------------------------
// Debug state
// -----------------------------------------------------------------------------

#[test]
fn test_status_message_expires() {
    let mut state = DebugState::default();
    state.set_message("Stamina reset", 1.0);

    state.tick_message(0.5);
    assert!(state.status_message.is_some());
    state.tick_message(0.5);
    assert!(state.status_message.is_none());
}

#[test]
fn test_hotkeys_are_unique() {
    let keys: Vec<_> = DebugAction::HOTKEYED
        .iter()
        .filter_map(|a| a.hotkey())
        .collect();
    assert_eq!(keys.len(), DebugAction::HOTKEYED.len());
    for (i, key) in keys.iter().enumerate() {
        assert!(!keys[i + 1..].contains(key));
    }
    assert_eq!(DebugAction::Close.hotkey(), None);
}

#[test]
fn test_button_labels_show_hotkeys() {
    for action in DebugAction::HOTKEYED {
        let key = format!("{:?}", action.hotkey().expect("hotkeyed"));
        let letter = key.trim_start_matches("Key");
        assert!(
            action.label().ends_with(&format!("[Ctrl+{}]", letter)),
            "{:?} label {:?}",
            action,
            action.label()
        );
    }
    assert_eq!(DebugAction::Close.label(), "X");
}
