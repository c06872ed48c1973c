//! Motion domain: components and physics layers for the controlled entity.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, platforms, and anything else the player can stand on or bump into
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Shape of the downward ground ray cast from the player's feet.
#[derive(Component, Debug, Clone, Copy)]
pub struct FootProbe {
    /// Distance from the entity origin to the bottom of its collider
    pub half_height: f32,
    /// How far below the feet still counts as grounded
    pub reach: f32,
}

impl Default for FootProbe {
    fn default() -> Self {
        Self {
            half_height: 0.9,
            reach: 0.15,
        }
    }
}

/// Equipment that must be active for the backward dash. Entities without it
/// are never gated.
#[derive(Component, Debug, Default)]
pub struct BackwardDashGear {
    pub active: bool,
}

/// Marker for the camera orbiting the player
#[derive(Component, Debug)]
pub struct FollowCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: -0.35,
            distance: 9.0,
        }
    }
}
