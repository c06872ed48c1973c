//! Course domain: platform, trigger-zone, and light spawning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::{BoxDef, CourseLayout};
use crate::course::components::{CoursePlatform, ZoneKind, ZoneVisual};
use crate::motion::{GameLayer, Ground, MotionController, Player, ZoneResolver};

pub(crate) fn spawn_course(
    mut commands: Commands,
    layout: Option<Res<CourseLayout>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let layout = match layout {
        Some(layout) => layout.clone(),
        None => {
            warn!("CourseLayout not available, building the fallback course");
            CourseLayout::fallback()
        }
    };

    let platform_color = Color::srgb(0.35, 0.4, 0.35);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    for platform in &layout.platforms {
        let size = Vec3::from(platform.bounds.size).abs();
        commands.spawn((
            Ground,
            CoursePlatform {
                id: platform.id.clone(),
            },
            Name::new(platform.id.clone()),
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(platform_color)),
            Transform::from_translation(Vec3::from(platform.bounds.center)),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            ground_layers,
        ));
    }

    let zones = layout
        .unlock_zones
        .iter()
        .map(|z| (ZoneKind::Unlock(z.capability), &z.bounds))
        .chain(layout.special_jump_pads.iter().map(|b| (ZoneKind::SpecialJump, b)))
        .chain(layout.speed_boost_fields.iter().map(|b| (ZoneKind::SpeedBoost, b)))
        .chain(layout.stamina_collectibles.iter().map(|b| (ZoneKind::Collectible, b)))
        .chain(layout.crouch_forward_zones.iter().map(|b| (ZoneKind::CrouchForward, b)));

    let mut zone_count = 0;
    for (kind, bounds) in zones {
        spawn_zone_visual(&mut commands, &mut meshes, &mut materials, kind, bounds);
        zone_count += 1;
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 20.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!(
        "Course spawned: {} platforms, {} trigger zones",
        layout.platforms.len(),
        zone_count
    );
}

fn spawn_zone_visual(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    kind: ZoneKind,
    bounds: &BoxDef,
) {
    let volume = bounds.volume();
    let size = volume.size();

    commands.spawn((
        ZoneVisual { kind, volume },
        Name::new(kind.label()),
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: kind.color(),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(volume.center),
    ));
}

/// Whether a zone visual still has a live trigger behind it.
pub fn zone_visible(visual: &ZoneVisual, zones: &ZoneResolver) -> bool {
    match visual.kind {
        ZoneKind::Unlock(capability) => zones
            .pending_unlocks()
            .any(|z| z.capability == capability && z.volume == visual.volume),
        ZoneKind::Collectible => zones
            .stamina_collectibles
            .iter()
            .any(|v| *v == visual.volume),
        ZoneKind::SpecialJump | ZoneKind::SpeedBoost | ZoneKind::CrouchForward => true,
    }
}

/// Hide unlock zones once entered and collectibles once consumed.
pub(crate) fn sync_zone_visuals(
    player: Query<&MotionController, With<Player>>,
    mut visuals: Query<(&ZoneVisual, &mut Visibility)>,
) {
    let Ok(controller) = player.single() else {
        return;
    };

    for (visual, mut visibility) in &mut visuals {
        let wanted = if zone_visible(visual, controller.zones()) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
    }
}
