//! Content domain: RON-driven motion tuning and course layout.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{BoxDef, CourseLayout, PlatformDef, UnlockZoneDef};
pub use loader::{
    ContentLoadError, LAYOUT_FILE, MotionContent, TUNING_FILE, load_motion_content, parse_ron,
};
pub use validation::{ValidationError, validate_layout};

use bevy::prelude::*;
use std::path::Path;

use crate::motion::MotionTuning;

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>()
            .insert_resource(CourseLayout::fallback())
            .add_systems(PreStartup, load_content);
    }
}

/// Replace the default tuning and layout with the files under `assets/data`.
/// Each file falls back on its own when it fails to load.
fn load_content(mut commands: Commands) {
    let content = load_motion_content(Path::new(CONTENT_DIR));
    for error in &content.errors {
        warn!("{}", error);
    }

    match content.tuning {
        Some(tuning) => {
            info!("Loaded motion tuning from {}", TUNING_FILE);
            commands.insert_resource(tuning);
        }
        None => warn!("Motion tuning unavailable, using defaults"),
    }

    match content.layout {
        Some(layout) => {
            for error in validate_layout(&layout) {
                warn!("Course layout: {}", error);
            }
            info!(
                "Loaded course layout: {} platforms, {} unlock zones, {} pads, {} boost fields, {} collectibles",
                layout.platforms.len(),
                layout.unlock_zones.len(),
                layout.special_jump_pads.len(),
                layout.speed_boost_fields.len(),
                layout.stamina_collectibles.len()
            );
            commands.insert_resource(layout);
        }
        None => warn!("Course layout unavailable, using fallback course"),
    }
}
