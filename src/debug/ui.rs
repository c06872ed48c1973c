//! Debug domain: UI components and layout helpers.

use bevy::prelude::*;

use crate::debug::state::DebugAction;

/// Marker for the debug UI root
#[derive(Component, Debug)]
pub struct DebugUI;

/// Marker for the motion info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Marker for status message text
#[derive(Component, Debug)]
pub struct DebugStatusMessage;

/// Debug panel button
#[derive(Component, Debug)]
pub struct DebugButton {
    pub action: DebugAction,
}

const BUTTON_COLOR: Color = Color::srgb(0.2, 0.2, 0.28);
const TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
const TITLE_COLOR: Color = Color::srgb(0.9, 0.7, 0.3);

/// Title row, status line, and one button per hotkeyed action.
pub(crate) fn spawn_debug_ui(commands: &mut Commands) {
    commands
        .spawn((
            DebugUI,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(20.0),
                top: Val::Px(20.0),
                width: Val::Px(280.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.95)),
            ZIndex(500),
        ))
        .with_children(|parent| {
            parent
                .spawn(Node {
                    justify_content: JustifyContent::SpaceBetween,
                    align_items: AlignItems::Center,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        Text::new("DEBUG (F1)"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(TITLE_COLOR),
                    ));
                    spawn_debug_button(row, DebugAction::Close);
                });

            parent.spawn((
                DebugStatusMessage,
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.9, 0.5)),
                Node {
                    min_height: Val::Px(16.0),
                    ..default()
                },
            ));

            parent
                .spawn(Node {
                    flex_wrap: FlexWrap::Wrap,
                    column_gap: Val::Px(8.0),
                    row_gap: Val::Px(4.0),
                    ..default()
                })
                .with_children(|row| {
                    for action in DebugAction::HOTKEYED {
                        spawn_debug_button(row, action);
                    }
                });
        });
}

fn spawn_debug_button(parent: &mut ChildSpawnerCommands, action: DebugAction) {
    parent
        .spawn((
            DebugButton { action },
            Button,
            Node {
                padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                ..default()
            },
            BackgroundColor(BUTTON_COLOR),
        ))
        .with_child((
            Text::new(action.label()),
            TextFont {
                font_size: 11.0,
                ..default()
            },
            TextColor(TEXT_COLOR),
        ));
}

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
