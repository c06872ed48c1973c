//! Content data definitions for the course layout file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::motion::{Capability, TriggerVolume, UnlockZone, VolumeSet, ZoneResolver};

/// Axis-aligned box given by its center and full size.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BoxDef {
    pub center: [f32; 3],
    pub size: [f32; 3],
}

impl BoxDef {
    pub fn volume(&self) -> TriggerVolume {
        TriggerVolume::new(Vec3::from(self.center), Vec3::from(self.size) * 0.5)
    }

    pub fn is_finite(&self) -> bool {
        self.center.iter().chain(self.size.iter()).all(|v| v.is_finite())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlatformDef {
    pub id: String,
    pub bounds: BoxDef,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UnlockZoneDef {
    pub capability: Capability,
    pub bounds: BoxDef,
}

/// Static geometry and trigger volumes of a course.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CourseLayout {
    pub spawn_point: [f32; 3],
    pub platforms: Vec<PlatformDef>,
    pub unlock_zones: Vec<UnlockZoneDef>,
    pub special_jump_pads: Vec<BoxDef>,
    pub speed_boost_fields: Vec<BoxDef>,
    pub stamina_collectibles: Vec<BoxDef>,
    pub crouch_forward_zones: Vec<BoxDef>,
}

impl CourseLayout {
    /// A bare floor, used when no layout file could be loaded.
    pub fn fallback() -> Self {
        Self {
            spawn_point: [0.0, 2.0, 0.0],
            platforms: vec![PlatformDef {
                id: "floor".to_string(),
                bounds: BoxDef {
                    center: [0.0, -0.5, 0.0],
                    size: [60.0, 1.0, 60.0],
                },
            }],
            ..default()
        }
    }

    pub fn spawn_position(&self) -> Vec3 {
        Vec3::from(self.spawn_point)
    }

    /// Build the trigger sets the motion controller evaluates each frame.
    pub fn zone_resolver(&self) -> ZoneResolver {
        let volumes = |defs: &[BoxDef]| VolumeSet::new(defs.iter().map(BoxDef::volume).collect());

        ZoneResolver {
            unlocks: self
                .unlock_zones
                .iter()
                .map(|z| UnlockZone::new(z.capability, z.bounds.volume()))
                .collect(),
            special_jump_pads: volumes(&self.special_jump_pads),
            speed_boost_fields: volumes(&self.speed_boost_fields),
            stamina_collectibles: volumes(&self.stamina_collectibles),
            crouch_forward_zones: volumes(&self.crouch_forward_zones),
        }
    }
}
