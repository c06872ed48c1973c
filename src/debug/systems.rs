//! Debug domain: hotkeys, panel buttons, and the motion info overlay.

use bevy::prelude::*;

use crate::debug::snapshot::MotionSnapshot;
use crate::debug::state::{DebugAction, DebugState};
use crate::debug::ui::{
    DebugButton, DebugInfoOverlay, DebugStatusMessage, DebugUI, spawn_debug_info_overlay,
    spawn_debug_ui,
};
use crate::motion::{BackwardDashGear, Capability, MotionController, Player};

type PlayerDebugQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static Transform,
        &'static mut MotionController,
        Option<&'static mut BackwardDashGear>,
    ),
    With<Player>,
>;

/// Toggle debug UI with F1 or backtick key
pub(crate) fn toggle_debug_ui(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_ui: Query<Entity, With<DebugUI>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);

    if toggle {
        debug_state.ui_visible = !debug_state.ui_visible;

        if debug_state.ui_visible {
            spawn_debug_ui(&mut commands);
        } else {
            for entity in &existing_ui {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Ctrl+key shortcuts for every panel action
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut player_query: PlayerDebugQuery,
    existing_ui: Query<Entity, With<DebugUI>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    for action in DebugAction::HOTKEYED {
        let Some(key) = action.hotkey() else {
            continue;
        };
        if keyboard.just_pressed(key) {
            run_debug_action(
                action,
                time.elapsed_secs(),
                &mut commands,
                &mut debug_state,
                &mut player_query,
                &existing_ui,
            );
        }
    }
}

/// Handle button clicks in debug UI
pub(crate) fn handle_debug_buttons(
    mut commands: Commands,
    time: Res<Time>,
    mut debug_state: ResMut<DebugState>,
    button_query: Query<(&DebugButton, &Interaction), Changed<Interaction>>,
    mut player_query: PlayerDebugQuery,
    existing_ui: Query<Entity, With<DebugUI>>,
) {
    for (button, interaction) in &button_query {
        if *interaction != Interaction::Pressed {
            continue;
        }
        run_debug_action(
            button.action,
            time.elapsed_secs(),
            &mut commands,
            &mut debug_state,
            &mut player_query,
            &existing_ui,
        );
    }
}

fn run_debug_action(
    action: DebugAction,
    now: f32,
    commands: &mut Commands,
    debug_state: &mut DebugState,
    player_query: &mut PlayerDebugQuery,
    existing_ui: &Query<Entity, With<DebugUI>>,
) {
    match action {
        DebugAction::ToggleInfo => {
            debug_state.show_info = !debug_state.show_info;
            let msg = if debug_state.show_info {
                "Motion info ON"
            } else {
                "Motion info OFF"
            };
            debug_state.set_message(msg, 2.0);
            info!("[DEBUG] {}", msg);
            if debug_state.show_info {
                spawn_debug_info_overlay(commands);
            }
        }
        DebugAction::ToggleGear => {
            let Ok((_, _, Some(mut gear))) = player_query.single_mut() else {
                debug_state.set_message("No backward dash gear", 2.0);
                return;
            };
            gear.active = !gear.active;
            let msg = if gear.active {
                "Backward dash gear ON"
            } else {
                "Backward dash gear OFF"
            };
            debug_state.set_message(msg, 2.0);
            info!("[DEBUG] {}", msg);
        }
        DebugAction::UnlockAll => {
            let Ok((_, mut controller, _)) = player_query.single_mut() else {
                return;
            };
            let granted = Capability::ALL
                .into_iter()
                .filter(|c| controller.grant(*c))
                .count();
            debug_state.set_message(format!("Unlocked {} abilities", granted), 2.0);
            info!("[DEBUG] Granted {} capabilities", granted);
        }
        DebugAction::ResetStamina => {
            let Ok((_, mut controller, _)) = player_query.single_mut() else {
                return;
            };
            controller.reset_stamina();
            debug_state.set_message("Stamina reset", 2.0);
            info!("[DEBUG] Stamina reset and decay re-armed");
        }
        DebugAction::DumpSnapshot => {
            let Ok((transform, controller, gear)) = player_query.single() else {
                return;
            };
            let snapshot = MotionSnapshot::capture(
                now,
                transform.translation,
                &controller,
                gear.map(|g| g.active),
            );
            match snapshot.to_json() {
                Ok(json) => {
                    info!("[DEBUG] Motion snapshot:\n{}", json);
                    debug_state.set_message("Snapshot written to log", 2.0);
                }
                Err(err) => warn!("[DEBUG] Failed to serialize motion snapshot: {}", err),
            }
        }
        DebugAction::Close => {
            debug_state.ui_visible = false;
            for entity in existing_ui.iter() {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Update status message timer and mirror it into the panel
pub(crate) fn update_status_message(
    time: Res<Time>,
    mut debug_state: ResMut<DebugState>,
    mut text_query: Query<&mut Text, With<DebugStatusMessage>>,
) {
    debug_state.tick_message(time.delta_secs());

    let message = debug_state
        .status_message
        .as_ref()
        .map(|(msg, _)| msg.as_str())
        .unwrap_or("");
    for mut text in &mut text_query {
        if text.0 != message {
            text.0 = message.to_string();
        }
    }
}

/// Keep the info overlay in sync with the player's motion state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    time: Res<Time>,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &MotionController, Option<&BackwardDashGear>), With<Player>>,
    mut overlay_query: Query<(Entity, &mut Text), With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for (entity, _) in &overlay_query {
            commands.entity(entity).despawn();
        }
        return;
    }

    let Ok((transform, controller, gear)) = player_query.single() else {
        return;
    };
    let snapshot = MotionSnapshot::capture(
        time.elapsed_secs(),
        transform.translation,
        controller,
        gear.map(|g| g.active),
    );

    for (_, mut text) in &mut overlay_query {
        **text = snapshot.overlay_text();
    }
}
