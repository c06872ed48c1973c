//! UI domain: stamina bar and ability HUD.

mod hud_abilities;
mod hud_stamina;
#[cfg(test)]
mod tests;

pub use hud_abilities::ability_readout;
pub use hud_stamina::stamina_color;

use bevy::prelude::*;

use crate::ui::hud_abilities::{spawn_ability_readout_ui, update_ability_readout};
use crate::ui::hud_stamina::{spawn_stamina_bar_ui, update_stamina_bar};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_stamina_bar_ui, spawn_ability_readout_ui))
            .add_systems(Update, (update_stamina_bar, update_ability_readout));
    }
}
