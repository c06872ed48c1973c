//! Content domain: tests for RON parsing and layout validation.

use bevy::prelude::Vec3;

use super::{
    BoxDef, CourseLayout, PlatformDef, UnlockZoneDef, load_motion_content, parse_ron,
    validate_layout,
};
use crate::motion::{AirJumpTiming, Capability, CapabilityFlags, MotionTuning, RunModeBlend};

fn unit_box(center: [f32; 3]) -> BoxDef {
    BoxDef {
        center,
        size: [1.0, 1.0, 1.0],
    }
}

// -----------------------------------------------------------------------------
// Tuning parsing
// -----------------------------------------------------------------------------

#[test]
fn test_partial_tuning_fills_defaults() {
    let tuning: MotionTuning = parse_ron(
        "inline",
        "(base_speed: 8.0, forward_dash: (speed: 14.0), air_jump_timing: SincePress)",
    )
    .expect("tuning should parse");

    assert_eq!(tuning.base_speed, 8.0);
    assert_eq!(tuning.forward_dash.speed, 14.0);
    assert_eq!(
        tuning.forward_dash.cooldown,
        MotionTuning::default().forward_dash.cooldown
    );
    assert_eq!(tuning.air_jump_timing, AirJumpTiming::SincePress);
    assert_eq!(tuning.run_mode_blend, RunModeBlend::Replace);
}

#[test]
fn test_tuning_capabilities_parse() {
    let tuning: MotionTuning = parse_ron(
        "inline",
        "(capabilities: (can_double_jump: true, can_forward_dash: true))",
    )
    .expect("tuning should parse");

    assert!(tuning.capabilities.can_double_jump);
    assert!(tuning.capabilities.can_forward_dash);
    assert!(!tuning.capabilities.can_triple_jump);
}

#[test]
fn test_malformed_tuning_reports_file() {
    let err = parse_ron::<MotionTuning>("motion_tuning.ron", "(base_speed: )")
        .expect_err("should fail");
    assert_eq!(err.file, "motion_tuning.ron");
    assert!(err.to_string().starts_with("Failed to load motion_tuning.ron"));
}

#[test]
fn test_sanitized_clamps_negative_timings() {
    let mut tuning = MotionTuning::default();
    tuning.forward_dash.cooldown = -1.0;
    tuning.backward_dash.duration = -0.5;
    tuning.crouch_run.acceleration_time = -2.0;
    tuning.stamina.drown_fraction = 1.5;
    tuning.resting_vertical_velocity = 3.0;
    tuning.gravity = f32::NAN;

    let tuning = tuning.sanitized();

    assert_eq!(tuning.forward_dash.cooldown, 0.0);
    assert_eq!(tuning.backward_dash.duration, 0.0);
    assert_eq!(tuning.crouch_run.acceleration_time, 0.0);
    assert_eq!(tuning.stamina.drown_fraction, 1.0);
    assert_eq!(tuning.resting_vertical_velocity, 0.0);
    assert_eq!(tuning.gravity, 0.0);
}

#[test]
fn test_sanitized_keeps_valid_values() {
    let tuning = MotionTuning::default();
    assert_eq!(tuning.clone().sanitized(), tuning);
}

#[test]
fn test_jump_heights() {
    let mut tuning = MotionTuning::default();
    tuning.jump_force = 20.0;
    tuning.double_jump_force = 20.0;
    tuning.gravity = 40.0;
    assert_eq!(tuning.single_jump_height(), 5.0);
    assert_eq!(tuning.max_reachable_height(), 5.0);

    tuning.capabilities.can_double_jump = true;
    assert_eq!(tuning.max_reachable_height(), 10.0);
}

// -----------------------------------------------------------------------------
// Layout parsing
// -----------------------------------------------------------------------------

#[test]
fn test_layout_parses_and_builds_resolver() {
    let layout: CourseLayout = parse_ron(
        "inline",
        r#"(
            spawn_point: (0.0, 2.0, 0.0),
            platforms: [(id: "floor", bounds: (center: (0.0, -0.5, 0.0), size: (40.0, 1.0, 40.0)))],
            unlock_zones: [(capability: DoubleJump, bounds: (center: (5.0, 1.0, 0.0), size: (2.0, 2.0, 2.0)))],
            speed_boost_fields: [(center: (0.0, 1.0, 10.0), size: (4.0, 2.0, 4.0))],
        )"#,
    )
    .expect("layout should parse");

    assert_eq!(layout.spawn_position(), Vec3::new(0.0, 2.0, 0.0));
    assert!(validate_layout(&layout).is_empty());

    let resolver = layout.zone_resolver();
    assert_eq!(resolver.unlocks.len(), 1);
    assert_eq!(resolver.unlocks[0].capability, Capability::DoubleJump);
    assert!(resolver.unlocks[0].volume.contains(Vec3::new(5.5, 1.5, 0.5)));
    assert!(resolver.speed_boost_fields.any_contains(Vec3::new(1.0, 1.0, 11.0)));
    assert!(resolver.special_jump_pads.is_empty());
}

#[test]
fn test_fallback_layout_is_valid() {
    let layout = CourseLayout::fallback();
    assert!(validate_layout(&layout).is_empty());
    assert_eq!(layout.platforms.len(), 1);
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_validation_flags_duplicates_and_bad_boxes() {
    let layout = CourseLayout {
        platforms: vec![
            PlatformDef {
                id: "a".to_string(),
                bounds: unit_box([0.0, 0.0, 0.0]),
            },
            PlatformDef {
                id: "a".to_string(),
                bounds: BoxDef {
                    center: [0.0, 0.0, 0.0],
                    size: [1.0, 0.0, 1.0],
                },
            },
        ],
        unlock_zones: vec![
            UnlockZoneDef {
                capability: Capability::ForwardDash,
                bounds: unit_box([1.0, 0.0, 0.0]),
            },
            UnlockZoneDef {
                capability: Capability::ForwardDash,
                bounds: unit_box([2.0, 0.0, 0.0]),
            },
        ],
        stamina_collectibles: vec![BoxDef {
            center: [f32::INFINITY, 0.0, 0.0],
            size: [1.0, 1.0, 1.0],
        }],
        ..Default::default()
    };

    let errors = validate_layout(&layout);
    let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();

    assert_eq!(errors.len(), 4, "{:?}", rendered);
    assert!(rendered.iter().any(|e| e == "Platform 'a': duplicate id"));
    assert!(rendered.iter().any(|e| e.contains("must be positive")));
    assert!(
        rendered
            .iter()
            .any(|e| e.starts_with("UnlockZone 'Forward Dash'"))
    );
    assert!(
        rendered
            .iter()
            .any(|e| e == "StaminaCollectible '0': non-finite coordinates")
    );
}

// -----------------------------------------------------------------------------
// Shipped content
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_content_loads_and_validates() {
    let base = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(super::CONTENT_DIR);
    let content = load_motion_content(&base);
    assert!(content.errors.is_empty(), "{:?}", content.errors);
    let tuning = content.tuning.expect("tuning loads");
    let layout = content.layout.expect("layout loads");

    assert_eq!(tuning.clone().sanitized(), tuning);
    assert_eq!(tuning.capabilities, CapabilityFlags::default());
    assert!(validate_layout(&layout).is_empty());

    let unlocked: Vec<_> = layout.unlock_zones.iter().map(|z| z.capability).collect();
    for capability in Capability::ALL {
        assert!(unlocked.contains(&capability), "no unlock zone for {:?}", capability);
    }

    let spawn = layout.spawn_position();
    assert!(
        layout
            .platforms
            .iter()
            .any(|p| p.bounds.volume().contains(spawn - Vec3::Y * 2.0))
    );
}

#[test]
fn test_failed_layout_keeps_loaded_tuning() {
    let dir = std::env::temp_dir().join(format!("ascent-content-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    std::fs::write(dir.join(super::TUNING_FILE), "(base_speed: 9.0)").expect("write tuning");
    std::fs::write(dir.join(super::LAYOUT_FILE), "(platforms: [oops])").expect("write layout");

    let content = load_motion_content(&dir);
    let _ = std::fs::remove_dir_all(&dir);

    assert_eq!(content.tuning.map(|t| t.base_speed), Some(9.0));
    assert!(content.layout.is_none());
    assert_eq!(content.errors.len(), 1);
    assert!(content.errors[0].file.ends_with(super::LAYOUT_FILE));
}

#[test]
fn test_missing_directory_reports_both_files() {
    let content = load_motion_content(std::path::Path::new("/nonexistent/ascent-data"));
    assert!(content.tuning.is_none());
    assert!(content.layout.is_none());
    assert_eq!(content.errors.len(), 2);
}
