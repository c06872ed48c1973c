//! Debug domain: serializable snapshot of the player's motion state.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::motion::{CapabilityFlags, DashKind, MotionController};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MotionSnapshot {
    pub time: f32,
    pub position: [f32; 3],
    pub horizontal_velocity: [f32; 3],
    pub vertical_velocity: f32,
    pub grounded: bool,
    pub facing_yaw: f32,
    pub stamina: f32,
    pub stamina_max: f32,
    pub stamina_decaying: bool,
    pub jump_charges_remaining: u8,
    pub jump_charges_max: u8,
    pub active_dash: Option<DashKind>,
    pub speed_boost: bool,
    pub special_jump: bool,
    pub run_mode_engaged: bool,
    pub capabilities: CapabilityFlags,
    pub equipment_active: Option<bool>,
    pub pending_unlocks: usize,
}

impl MotionSnapshot {
    pub fn capture(
        time: f32,
        position: Vec3,
        controller: &MotionController,
        equipment_active: Option<bool>,
    ) -> Self {
        let state = controller.state();
        let stamina = controller.stamina();
        let (remaining, max) = controller.jump_charges();

        Self {
            time,
            position: position.to_array(),
            horizontal_velocity: state.horizontal_velocity.to_array(),
            vertical_velocity: state.vertical_velocity,
            grounded: state.ground.grounded,
            facing_yaw: controller.facing_yaw(),
            stamina: stamina.current(),
            stamina_max: stamina.max(),
            stamina_decaying: stamina.is_decaying(),
            jump_charges_remaining: remaining,
            jump_charges_max: max,
            active_dash: controller.active_dash(),
            speed_boost: controller.speed_boost_active(),
            special_jump: controller.special_jump_active(),
            run_mode_engaged: controller.locomotion().run_mode_engaged(),
            capabilities: *controller.capabilities(),
            equipment_active,
            pending_unlocks: controller.zones().pending_unlocks().count(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Short multi-line form for the on-screen overlay.
    pub fn overlay_text(&self) -> String {
        let [x, y, z] = self.position;
        let speed = Vec3::from(self.horizontal_velocity).length();
        let dash = match self.active_dash {
            Some(kind) => format!("{:?}", kind),
            None => "-".to_string(),
        };
        let gear = match self.equipment_active {
            Some(true) => "on",
            Some(false) => "off",
            None => "n/a",
        };

        format!(
            "Pos: ({:.1}, {:.1}, {:.1})\nSpeed: {:.1} | Vy: {:.1}\nGrounded: {}\nStamina: {:.0}/{:.0}{}\nJumps: {}/{}\nDash: {}\nGear: {}\nPending unlocks: {}",
            x,
            y,
            z,
            speed,
            self.vertical_velocity,
            self.grounded,
            self.stamina,
            self.stamina_max,
            if self.stamina_decaying { " (decaying)" } else { "" },
            self.jump_charges_remaining,
            self.jump_charges_max,
            dash,
            gear,
            self.pending_unlocks
        )
    }
}
