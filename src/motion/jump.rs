//! Motion domain: tiered jump charges and tier selection.

use serde::{Deserialize, Serialize};

use crate::motion::ground::GroundSensor;
use crate::motion::zones::CapabilityFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum JumpTier {
    Ground,
    Double,
    Triple,
    /// Launch pad impulse, outside the charge accounting
    Special,
}

/// Charges available per airtime: 3 with triple jump, 2 with double, else 1.
pub fn max_charges(flags: &CapabilityFlags) -> u8 {
    if flags.can_triple_jump {
        3
    } else if flags.can_double_jump {
        2
    } else {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpLadder {
    remaining: u8,
    max: u8,
    air_jumps_fired: u8,
}

impl JumpLadder {
    pub fn new(flags: &CapabilityFlags) -> Self {
        let max = max_charges(flags);
        Self {
            remaining: max,
            max,
            air_jumps_fired: 0,
        }
    }

    pub fn on_landed(&mut self, flags: &CapabilityFlags) {
        self.max = max_charges(flags);
        self.remaining = self.max;
        self.air_jumps_fired = 0;
    }

    /// Pick up newly unlocked tiers. Remaining charges wait for the next landing.
    pub fn sync(&mut self, flags: &CapabilityFlags) {
        self.max = self.max.max(max_charges(flags));
    }

    /// Resolve a jump press.
    ///
    /// A press within the grace window of the last grounded frame is a ground
    /// jump and costs nothing. Otherwise a charge is spent on a double jump
    /// (first air jump, if unlocked) or triple jump, but only while the press
    /// is within the grace window of the last jump-input stamp.
    pub fn try_activate(
        &mut self,
        now: f32,
        ground: &GroundSensor,
        flags: &CapabilityFlags,
        grace_window: f32,
    ) -> Option<JumpTier> {
        if ground.within_ground_grace(now, grace_window) {
            return Some(JumpTier::Ground);
        }

        if self.remaining == 0 || !ground.within_jump_grace(now, grace_window) {
            return None;
        }

        let tier = if flags.can_double_jump && self.air_jumps_fired == 0 {
            JumpTier::Double
        } else if flags.can_triple_jump {
            JumpTier::Triple
        } else if flags.can_double_jump {
            JumpTier::Double
        } else {
            return None;
        };

        self.remaining -= 1;
        self.air_jumps_fired += 1;
        Some(tier)
    }

    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    pub fn max_charges(&self) -> u8 {
        self.max
    }
}
