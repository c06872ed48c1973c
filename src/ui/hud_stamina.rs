//! UI domain: stamina bar.

use bevy::prelude::*;

use crate::motion::{MotionController, Player};

pub(crate) const STAMINA_BAR_WIDTH: f32 = 200.0;
pub(crate) const STAMINA_BAR_HEIGHT: f32 = 20.0;
pub(crate) const HUD_PADDING: f32 = 16.0;

/// Marker for the stamina bar container
#[derive(Component)]
pub struct StaminaBarUI;

/// Marker for the stamina bar fill element
#[derive(Component)]
pub struct StaminaBarFill;

/// Fill color for a stamina fraction: green at full, amber at the usual decay
/// floor, red when nearly empty.
pub fn stamina_color(fraction: f32) -> Color {
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction > 0.5 {
        let t = (fraction - 0.5) * 2.0;
        Color::srgb(0.2 + (1.0 - t) * 0.7, 0.8, 0.3 * t)
    } else {
        let t = fraction * 2.0;
        Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
    }
}

pub(crate) fn spawn_stamina_bar_ui(mut commands: Commands) {
    commands
        .spawn((
            StaminaBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                width: Val::Px(STAMINA_BAR_WIDTH),
                height: Val::Px(STAMINA_BAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                StaminaBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(stamina_color(1.0)),
            ));
        });
}

pub(crate) fn update_stamina_bar(
    player_query: Query<&MotionController, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<StaminaBarFill>>,
) {
    let Ok(controller) = player_query.single() else {
        return;
    };

    let fraction = controller.stamina_fraction();
    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(fraction * 100.0);
        bg_color.0 = stamina_color(fraction);
    }
}
