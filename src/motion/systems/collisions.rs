//! Motion domain: spatial-query backed ground probe and move primitive.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::motion::{FootProbe, GameLayer, GroundProbe, MovePrimitive};

/// Gap kept between the collider and whatever it is pushed against.
const SKIN: f32 = 0.02;

/// Short downward ray from the player's feet against the Ground layer.
pub(crate) struct RayGroundProbe<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub origin: Vec3,
    pub foot: FootProbe,
}

impl GroundProbe for RayGroundProbe<'_, '_, '_> {
    fn probe(&mut self) -> bool {
        let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
        // Start slightly inside the collider so resting contact still hits
        let ray_origin = self.origin - Vec3::Y * (self.foot.half_height - SKIN);

        self.spatial_query
            .cast_ray(
                ray_origin,
                Dir3::NEG_Y,
                self.foot.reach + SKIN,
                true,
                &ground_filter,
            )
            .is_some()
    }
}

/// Moves a transform by shape-casting its collider, stopping at obstacles and
/// sliding once along the hit surface.
pub(crate) struct ShapeCastMover<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub collider: &'a Collider,
    pub transform: &'a mut Transform,
}

impl ShapeCastMover<'_, '_, '_> {
    /// Furthest travel along `displacement` before touching Ground, plus the hit normal.
    fn sweep(&self, displacement: Vec3) -> (Vec3, Option<Vec3>) {
        let Ok(direction) = Dir3::new(displacement) else {
            return (Vec3::ZERO, None);
        };
        let distance = displacement.length();
        let filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
        let config = ShapeCastConfig {
            ignore_origin_penetration: true,
            ..ShapeCastConfig::from_max_distance(distance + SKIN)
        };

        match self.spatial_query.cast_shape(
            self.collider,
            self.transform.translation,
            Quat::IDENTITY,
            direction,
            &config,
            &filter,
        ) {
            Some(hit) => {
                let travel = (hit.distance - SKIN).clamp(0.0, distance);
                (direction * travel, Some(hit.normal1))
            }
            None => (displacement, None),
        }
    }
}

impl MovePrimitive for ShapeCastMover<'_, '_, '_> {
    fn move_by(&mut self, displacement: Vec3) -> Vec3 {
        let (first, normal) = self.sweep(displacement);
        self.transform.translation += first;

        let Some(normal) = normal else {
            return first;
        };

        let remainder = displacement - first;
        let slide = remainder - normal * remainder.dot(normal);
        let (second, _) = self.sweep(slide);
        self.transform.translation += second;

        first + second
    }
}
