//! Course domain: markers for spawned geometry and zone visuals.

use bevy::prelude::*;

use crate::motion::{Capability, TriggerVolume};

#[derive(Component, Debug)]
pub struct CoursePlatform {
    pub id: String,
}

/// Which trigger a zone visual stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    Unlock(Capability),
    SpecialJump,
    SpeedBoost,
    Collectible,
    CrouchForward,
}

impl ZoneKind {
    pub fn label(self) -> String {
        match self {
            ZoneKind::Unlock(capability) => format!("Unlock: {}", capability.label()),
            ZoneKind::SpecialJump => "Special Jump Pad".to_string(),
            ZoneKind::SpeedBoost => "Speed Boost Field".to_string(),
            ZoneKind::Collectible => "Stamina Collectible".to_string(),
            ZoneKind::CrouchForward => "Crouch Forward Zone".to_string(),
        }
    }

    pub fn color(self) -> Color {
        match self {
            ZoneKind::Unlock(_) => Color::srgba(0.9, 0.75, 0.2, 0.35),
            ZoneKind::SpecialJump => Color::srgba(0.8, 0.3, 0.9, 0.4),
            ZoneKind::SpeedBoost => Color::srgba(0.3, 0.6, 1.0, 0.25),
            ZoneKind::Collectible => Color::srgba(0.3, 0.9, 0.4, 0.5),
            ZoneKind::CrouchForward => Color::srgba(0.9, 0.5, 0.2, 0.2),
        }
    }
}

/// Translucent box drawn over a trigger volume. Never collides.
#[derive(Component, Debug, Clone, Copy)]
pub struct ZoneVisual {
    pub kind: ZoneKind,
    pub volume: TriggerVolume,
}
