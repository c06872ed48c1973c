//! UI domain: jump charge, dash, and unlocked ability readout.

use bevy::prelude::*;

use crate::motion::{DashKind, MotionController, Player};
use crate::ui::hud_stamina::{HUD_PADDING, STAMINA_BAR_HEIGHT};

/// Marker for the ability readout text
#[derive(Component)]
pub struct AbilityReadoutText;

/// Multi-line summary of the controller's movement state.
pub fn ability_readout(controller: &MotionController, now: f32) -> String {
    let (remaining, max) = controller.jump_charges();
    let mut lines = vec![format!("Jumps: {}/{}", remaining, max)];

    let capabilities = controller.capabilities();
    for dash in controller.dashes().iter() {
        if !capabilities.get(dash.kind.capability()) {
            continue;
        }
        let name = match dash.kind {
            DashKind::Forward => "Forward dash",
            DashKind::Backward => "Backward dash",
            DashKind::Downward => "Downward dash",
        };
        let status = if dash.active {
            "active".to_string()
        } else {
            let cooldown = dash.cooldown_remaining(now);
            if cooldown > 0.0 {
                format!("{:.1}s", cooldown)
            } else {
                "ready".to_string()
            }
        };
        lines.push(format!("{}: {}", name, status));
    }

    if controller.speed_boost_active() {
        lines.push("Speed boost!".to_string());
    }

    let unlocked: Vec<_> = capabilities.unlocked().map(|c| c.label()).collect();
    if unlocked.is_empty() {
        lines.push("Unlocked: none".to_string());
    } else {
        lines.push(format!("Unlocked: {}", unlocked.join(", ")));
    }

    lines.join("\n")
}

pub(crate) fn spawn_ability_readout_ui(mut commands: Commands) {
    commands.spawn((
        AbilityReadoutText,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.85, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING + STAMINA_BAR_HEIGHT + 8.0),
            ..default()
        },
    ));
}

pub(crate) fn update_ability_readout(
    time: Res<Time>,
    player_query: Query<&MotionController, With<Player>>,
    mut text_query: Query<&mut Text, With<AbilityReadoutText>>,
) {
    let Ok(controller) = player_query.single() else {
        return;
    };

    let readout = ability_readout(controller, time.elapsed_secs());
    for mut text in &mut text_query {
        if text.0 != readout {
            text.0.clone_from(&readout);
        }
    }
}
