//! Course domain: demo geometry and trigger-zone visuals built from the course layout.

mod components;
mod spawn;
#[cfg(test)]
mod tests;

pub use components::{CoursePlatform, ZoneKind, ZoneVisual};
pub use spawn::zone_visible;

use bevy::prelude::*;

use crate::course::spawn::{spawn_course, sync_zone_visuals};

pub struct CoursePlugin;

impl Plugin for CoursePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_course)
            .add_systems(Update, sync_zone_visuals);
    }
}
