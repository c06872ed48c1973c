//! Course domain: tests for zone visual bookkeeping.

use bevy::prelude::*;

use super::{ZoneKind, ZoneVisual, zone_visible};
use crate::motion::{
    Capability, CapabilityFlags, TriggerVolume, UnlockZone, VolumeSet, ZoneResolver,
};

fn unit_box(x: f32) -> TriggerVolume {
    TriggerVolume::new(Vec3::new(x, 0.0, 0.0), Vec3::ONE)
}

#[test]
fn test_unlock_visual_hides_after_entry() {
    let mut zones = ZoneResolver {
        unlocks: vec![
            UnlockZone::new(Capability::ForwardDash, unit_box(0.0)),
            UnlockZone::new(Capability::ForwardRun, unit_box(5.0)),
        ],
        ..Default::default()
    };
    let dash = ZoneVisual {
        kind: ZoneKind::Unlock(Capability::ForwardDash),
        volume: unit_box(0.0),
    };
    let run = ZoneVisual {
        kind: ZoneKind::Unlock(Capability::ForwardRun),
        volume: unit_box(5.0),
    };
    assert!(zone_visible(&dash, &zones));

    let mut flags = CapabilityFlags::default();
    zones.resolve(Vec3::ZERO, &mut flags, false);

    assert!(!zone_visible(&dash, &zones));
    assert!(zone_visible(&run, &zones));
}

#[test]
fn test_collectible_visual_tracks_consumption() {
    let mut zones = ZoneResolver {
        stamina_collectibles: VolumeSet::new(vec![unit_box(0.0), unit_box(5.0)]),
        ..Default::default()
    };
    let first = ZoneVisual {
        kind: ZoneKind::Collectible,
        volume: unit_box(0.0),
    };
    let mut flags = CapabilityFlags::default();

    zones.resolve(Vec3::ZERO, &mut flags, false);
    assert!(zone_visible(&first, &zones));

    zones.resolve(Vec3::ZERO, &mut flags, true);
    assert!(!zone_visible(&first, &zones));
    assert_eq!(zones.stamina_collectibles.len(), 1);
}

#[test]
fn test_persistent_zones_stay_visible() {
    let zones = ZoneResolver::default();
    for kind in [
        ZoneKind::SpecialJump,
        ZoneKind::SpeedBoost,
        ZoneKind::CrouchForward,
    ] {
        let visual = ZoneVisual {
            kind,
            volume: unit_box(0.0),
        };
        assert!(zone_visible(&visual, &zones));
    }
}
