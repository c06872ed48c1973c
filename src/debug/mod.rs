//! Debug domain: developer panel, motion overlay, and state snapshots.
//!
//! Features:
//! - Unlock every ability
//! - Toggle the backward dash equipment
//! - Refill stamina and re-arm decay
//! - Live motion info overlay
//! - JSON snapshot of the controller state

mod snapshot;
mod state;
mod systems;
#[cfg(test)]
mod tests;
mod ui;

pub use snapshot::MotionSnapshot;
pub use state::{DebugAction, DebugState};

use bevy::prelude::*;

use crate::debug::systems::{
    handle_debug_buttons, handle_debug_hotkeys, toggle_debug_ui, update_debug_info_overlay,
    update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_ui,
                handle_debug_hotkeys,
                handle_debug_buttons,
                update_status_message,
                update_debug_info_overlay,
            )
                .chain(),
        );
    }
}
