//! Debug domain: state and action definitions for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether debug UI is visible
    pub ui_visible: bool,
    /// Whether to show the motion info overlay
    pub show_info: bool,
    /// Message to display temporarily in debug UI
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Count down the status message, clearing it once expired.
    pub fn tick_message(&mut self, dt: f32) {
        if let Some((_, ref mut duration)) = self.status_message {
            *duration -= dt;
            if *duration <= 0.0 {
                self.status_message = None;
            }
        }
    }
}

/// Actions that can be triggered from debug UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    ToggleInfo,
    ToggleGear,
    UnlockAll,
    ResetStamina,
    DumpSnapshot,
    Close,
}

impl DebugAction {
    /// Ctrl-modified hotkey bound to each action.
    pub fn hotkey(self) -> Option<KeyCode> {
        match self {
            DebugAction::ToggleInfo => Some(KeyCode::KeyI),
            DebugAction::ToggleGear => Some(KeyCode::KeyG),
            DebugAction::UnlockAll => Some(KeyCode::KeyU),
            DebugAction::ResetStamina => Some(KeyCode::KeyH),
            DebugAction::DumpSnapshot => Some(KeyCode::KeyJ),
            DebugAction::Close => None,
        }
    }

    /// Button caption, including the hotkey where one exists.
    pub fn label(self) -> &'static str {
        match self {
            DebugAction::ToggleInfo => "Info [Ctrl+I]",
            DebugAction::ToggleGear => "Gear [Ctrl+G]",
            DebugAction::UnlockAll => "Unlock All [Ctrl+U]",
            DebugAction::ResetStamina => "Stamina [Ctrl+H]",
            DebugAction::DumpSnapshot => "Snapshot [Ctrl+J]",
            DebugAction::Close => "X",
        }
    }

    pub const HOTKEYED: [DebugAction; 5] = [
        DebugAction::ToggleInfo,
        DebugAction::ToggleGear,
        DebugAction::UnlockAll,
        DebugAction::ResetStamina,
        DebugAction::DumpSnapshot,
    ];
}
