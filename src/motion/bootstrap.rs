//! Motion domain: player and camera bootstrap from loaded content.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::CourseLayout;
use crate::motion::{
    BackwardDashGear, FollowCamera, FootProbe, GameLayer, MotionController, MotionTuning, Player,
};

const PLAYER_RADIUS: f32 = 0.4;
const PLAYER_LENGTH: f32 = 1.0;

/// Spawn the controlled entity at the course spawn point.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MotionTuning>,
    layout: Option<Res<CourseLayout>>,
    existing_player: Query<Entity, With<Player>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let layout = match layout {
        Some(layout) => layout.clone(),
        None => {
            warn!("CourseLayout not available, spawning on the fallback course");
            CourseLayout::fallback()
        }
    };

    let controller = MotionController::new(tuning.clone(), layout.zone_resolver());
    let spawn = layout.spawn_position();

    info!(
        "Spawning player at {:?}: speed={}, jump={} (apex {:.1}, max reach {:.1}), charges={:?}, zones={}",
        spawn,
        tuning.base_speed,
        tuning.jump_force,
        tuning.single_jump_height(),
        tuning.max_reachable_height(),
        controller.jump_charges(),
        controller.zones().unlocks.len()
    );

    commands.spawn((
        // Identity & Motion
        (
            Player,
            controller,
            FootProbe {
                half_height: PLAYER_LENGTH * 0.5 + PLAYER_RADIUS,
                ..default()
            },
            BackwardDashGear::default(),
        ),
        // Rendering
        Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_LENGTH))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
        Transform::from_translation(spawn),
        // Physics
        (
            RigidBody::Kinematic,
            Collider::capsule(PLAYER_RADIUS, PLAYER_LENGTH),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        FollowCamera::default(),
        Transform::from_xyz(0.0, 4.0, 9.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
