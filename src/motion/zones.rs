//! Motion domain: trigger volumes, capability unlocks, and zone effects.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// An ability that can be switched on by walking into its unlock zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Capability {
    DoubleJump,
    TripleJump,
    ForwardDash,
    BackwardDash,
    DownwardDash,
    ForwardRun,
    CrouchRun,
    SpecialJump,
    SpeedBoost,
}

impl Capability {
    pub const ALL: [Capability; 9] = [
        Capability::DoubleJump,
        Capability::TripleJump,
        Capability::ForwardDash,
        Capability::BackwardDash,
        Capability::DownwardDash,
        Capability::ForwardRun,
        Capability::CrouchRun,
        Capability::SpecialJump,
        Capability::SpeedBoost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Capability::DoubleJump => "Double Jump",
            Capability::TripleJump => "Triple Jump",
            Capability::ForwardDash => "Forward Dash",
            Capability::BackwardDash => "Backward Dash",
            Capability::DownwardDash => "Downward Dash",
            Capability::ForwardRun => "Forward Run",
            Capability::CrouchRun => "Crouch Run",
            Capability::SpecialJump => "Special Jump",
            Capability::SpeedBoost => "Speed Boost",
        }
    }
}

/// Unlock state for every ability the controller knows about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CapabilityFlags {
    pub can_double_jump: bool,
    pub can_triple_jump: bool,
    pub can_forward_dash: bool,
    pub can_backward_dash: bool,
    pub can_downward_dash: bool,
    pub can_forward_run: bool,
    pub can_crouch_run: bool,
    pub special_jump_enabled: bool,
    pub speed_boost_enabled: bool,
}

impl CapabilityFlags {
    /// Every capability unlocked.
    pub fn all() -> Self {
        let mut flags = Self::default();
        for capability in Capability::ALL {
            flags.grant(capability);
        }
        flags
    }

    pub fn get(&self, capability: Capability) -> bool {
        match capability {
            Capability::DoubleJump => self.can_double_jump,
            Capability::TripleJump => self.can_triple_jump,
            Capability::ForwardDash => self.can_forward_dash,
            Capability::BackwardDash => self.can_backward_dash,
            Capability::DownwardDash => self.can_downward_dash,
            Capability::ForwardRun => self.can_forward_run,
            Capability::CrouchRun => self.can_crouch_run,
            Capability::SpecialJump => self.special_jump_enabled,
            Capability::SpeedBoost => self.speed_boost_enabled,
        }
    }

    /// Turn a capability on. Returns true if it was previously off.
    pub fn grant(&mut self, capability: Capability) -> bool {
        let flag = match capability {
            Capability::DoubleJump => &mut self.can_double_jump,
            Capability::TripleJump => &mut self.can_triple_jump,
            Capability::ForwardDash => &mut self.can_forward_dash,
            Capability::BackwardDash => &mut self.can_backward_dash,
            Capability::DownwardDash => &mut self.can_downward_dash,
            Capability::ForwardRun => &mut self.can_forward_run,
            Capability::CrouchRun => &mut self.can_crouch_run,
            Capability::SpecialJump => &mut self.special_jump_enabled,
            Capability::SpeedBoost => &mut self.speed_boost_enabled,
        };
        let newly = !*flag;
        *flag = true;
        newly
    }

    pub fn unlocked(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|c| self.get(*c))
    }
}

/// Axis-aligned box region. Containment is inclusive on every face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerVolume {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl TriggerVolume {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.center).abs().cmple(self.half_extents).all()
    }

    pub fn size(&self) -> Vec3 {
        self.half_extents * 2.0
    }
}

/// A named collection of volumes queried as one region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VolumeSet {
    volumes: Vec<TriggerVolume>,
}

impl VolumeSet {
    pub fn new(volumes: Vec<TriggerVolume>) -> Self {
        Self { volumes }
    }

    pub fn any_contains(&self, point: Vec3) -> bool {
        self.volumes.iter().any(|v| v.contains(point))
    }

    /// Drop every volume containing `point`, returning how many were removed.
    pub fn remove_containing(&mut self, point: Vec3) -> usize {
        let before = self.volumes.len();
        self.volumes.retain(|v| !v.contains(point));
        before - self.volumes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TriggerVolume> {
        self.volumes.iter()
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}

/// One-shot trigger granting a capability the first time it is entered.
#[derive(Debug, Clone, PartialEq)]
pub struct UnlockZone {
    pub capability: Capability,
    pub volume: TriggerVolume,
    pub consumed: bool,
}

impl UnlockZone {
    pub fn new(capability: Capability, volume: TriggerVolume) -> Self {
        Self {
            capability,
            volume,
            consumed: false,
        }
    }
}

/// What the entity's position resolved to this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneReport {
    /// Capabilities switched on by this frame's unlock zones
    pub unlocked: Vec<Capability>,
    pub special_jump: bool,
    pub speed_boost: bool,
    /// A stamina collectible was touched
    pub stamina_pickup: bool,
    pub in_crouch_zone: bool,
}

/// Every trigger the controller evaluates against the entity position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneResolver {
    pub unlocks: Vec<UnlockZone>,
    pub special_jump_pads: VolumeSet,
    pub speed_boost_fields: VolumeSet,
    pub stamina_collectibles: VolumeSet,
    pub crouch_forward_zones: VolumeSet,
}

impl ZoneResolver {
    pub fn resolve(
        &mut self,
        position: Vec3,
        flags: &mut CapabilityFlags,
        consume_collectibles: bool,
    ) -> ZoneReport {
        let mut report = ZoneReport::default();

        for zone in self.unlocks.iter_mut().filter(|z| !z.consumed) {
            if zone.volume.contains(position) {
                zone.consumed = true;
                if flags.grant(zone.capability) {
                    report.unlocked.push(zone.capability);
                }
            }
        }

        report.special_jump =
            flags.special_jump_enabled && self.special_jump_pads.any_contains(position);
        report.speed_boost =
            flags.speed_boost_enabled && self.speed_boost_fields.any_contains(position);

        report.stamina_pickup = if consume_collectibles {
            self.stamina_collectibles.remove_containing(position) > 0
        } else {
            self.stamina_collectibles.any_contains(position)
        };

        report.in_crouch_zone = self.crouch_forward_zones.any_contains(position);
        report
    }

    /// Unlock zones not yet entered.
    pub fn pending_unlocks(&self) -> impl Iterator<Item = &UnlockZone> {
        self.unlocks.iter().filter(|z| !z.consumed)
    }
}
