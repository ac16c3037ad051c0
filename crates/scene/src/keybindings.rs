//! Keyboard shortcuts as a replaceable resource.
//!
//! Systems read [`KeyBindings`] instead of hardcoding `KeyCode`s, so an app can
//! insert its own table before `ScenePlugin` runs.

use bevy::prelude::*;

use crate::input_router::KeyAction;

/// A single key binding: a key code plus optional modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyBinding {
    pub const fn simple(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    pub const fn ctrl(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
        }
    }

    /// `just_pressed` for the key, with modifiers matching exactly.
    pub fn just_pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        if !keys.just_pressed(self.key) {
            return false;
        }
        let ctrl_held = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
        let shift_held = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
        ctrl_held == self.ctrl && shift_held == self.shift
    }

    /// Human-readable label (e.g. "Ctrl+X", "Esc").
    pub fn display_label(self) -> String {
        let mut label = String::new();
        if self.ctrl {
            label.push_str("Ctrl+");
        }
        if self.shift {
            label.push_str("Shift+");
        }
        label.push_str(keycode_label(self.key));
        label
    }
}

fn keycode_label(key: KeyCode) -> &'static str {
    match key {
        KeyCode::Escape => "Esc",
        KeyCode::KeyB => "B",
        KeyCode::KeyH => "H",
        KeyCode::KeyV => "V",
        KeyCode::KeyX => "X",
        KeyCode::Home => "Home",
        KeyCode::Space => "Space",
        KeyCode::Tab => "Tab",
        _ => "?",
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct KeyBindings {
    pub escape: KeyBinding,
    pub go_home: KeyBinding,
    pub toggle_calibration: KeyBinding,
    pub cycle_point_of_view: KeyBinding,
    pub export_layout: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            escape: KeyBinding::simple(KeyCode::Escape),
            go_home: KeyBinding::simple(KeyCode::KeyH),
            toggle_calibration: KeyBinding::simple(KeyCode::KeyB),
            cycle_point_of_view: KeyBinding::simple(KeyCode::KeyV),
            export_layout: KeyBinding::simple(KeyCode::KeyX),
        }
    }
}

impl KeyBindings {
    pub fn get(&self, action: KeyAction) -> KeyBinding {
        match action {
            KeyAction::Escape => self.escape,
            KeyAction::GoHome => self.go_home,
            KeyAction::ToggleCalibration => self.toggle_calibration,
            KeyAction::CyclePointOfView => self.cycle_point_of_view,
            KeyAction::ExportLayout => self.export_layout,
        }
    }

    /// Every action whose binding was pressed this frame, in [`KeyAction::ALL`] order.
    pub fn just_pressed(&self, keys: &ButtonInput<KeyCode>) -> Vec<KeyAction> {
        KeyAction::ALL
            .iter()
            .copied()
            .filter(|&action| self.get(action).just_pressed(keys))
            .collect()
    }

    /// Pairs of actions sharing the same binding.
    pub fn conflicts(&self) -> Vec<(KeyAction, KeyAction)> {
        let mut out = Vec::new();
        for (i, &a) in KeyAction::ALL.iter().enumerate() {
            for &b in &KeyAction::ALL[i + 1..] {
                if self.get(a) == self.get(b) {
                    out.push((a, b));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_have_no_conflicts() {
        assert!(KeyBindings::default().conflicts().is_empty());
    }

    #[test]
    fn test_conflict_detected() {
        let bindings = KeyBindings {
            go_home: KeyBinding::simple(KeyCode::KeyB),
            ..KeyBindings::default()
        };
        assert_eq!(
            bindings.conflicts(),
            vec![(KeyAction::GoHome, KeyAction::ToggleCalibration)]
        );
    }

    #[test]
    fn test_just_pressed_respects_modifiers() {
        let bindings = KeyBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyX);
        assert_eq!(bindings.just_pressed(&keys), vec![KeyAction::ExportLayout]);

        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ControlLeft);
        keys.press(KeyCode::KeyX);
        assert!(bindings.just_pressed(&keys).is_empty());
    }

    #[test]
    fn test_display_label() {
        assert_eq!(KeyBinding::simple(KeyCode::Escape).display_label(), "Esc");
        assert_eq!(KeyBinding::ctrl(KeyCode::KeyX).display_label(), "Ctrl+X");
    }
}
