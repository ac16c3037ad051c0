//! Mode-gated input routing.
//!
//! The rendering layer turns raw mouse and keyboard input into intents;
//! [`route_pointer`] and [`route_key`] decide, from a snapshot of the current
//! mode, which handler (if any) each intent reaches. Both are pure so every
//! gating rule is testable without a window.

use bevy::prelude::*;

use crate::app_state::{PointOfView, SceneState};
use crate::build_mode::{BuildMode, BuildRequest};
use crate::requests::SceneRequest;

/// The parts of the scene state that gate input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeSnapshot {
    pub point_of_view: PointOfView,
    pub calibration_active: bool,
    pub holding_district: bool,
    pub animation_in_flight: bool,
    pub game_active: bool,
    /// egui is using the pointer (hovering a panel or mid-drag).
    pub ui_wants_pointer: bool,
    /// egui has keyboard focus (e.g. a text field).
    pub ui_wants_keyboard: bool,
}

impl ModeSnapshot {
    pub fn capture(state: &SceneState, build: &BuildMode) -> Self {
        Self {
            point_of_view: state.point_of_view,
            calibration_active: state.calibration_active,
            holding_district: build.is_holding(),
            animation_in_flight: state.animation_in_flight,
            game_active: state.game_active,
            ui_wants_pointer: false,
            ui_wants_keyboard: false,
        }
    }

    pub fn with_ui(mut self, wants_pointer: bool, wants_keyboard: bool) -> Self {
        self.ui_wants_pointer = wants_pointer;
        self.ui_wants_keyboard = wants_keyboard;
        self
    }

    fn orbit_locked(&self) -> bool {
        self.animation_in_flight
            || self.point_of_view == PointOfView::ShipFollow
            || self.holding_district
    }
}

/// A pointer gesture, already classified by the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerIntent {
    /// Primary button went down. `district` is the one under the pointer.
    Press { district: Option<String> },
    /// Primary button released.
    Release,
    /// Press and release without dragging.
    Click { district: Option<String> },
    /// Primary-button drag by `delta` logical pixels.
    Drag { delta: Vec2 },
    /// Wheel motion, positive zooms in.
    Scroll { amount: f32 },
    /// Pointer moved; `district` is whatever it now rests on.
    Hover { district: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Escape,
    GoHome,
    ToggleCalibration,
    CyclePointOfView,
    ExportLayout,
}

impl KeyAction {
    pub const ALL: &'static [KeyAction] = &[
        Self::Escape,
        Self::GoHome,
        Self::ToggleCalibration,
        Self::CyclePointOfView,
        Self::ExportLayout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Escape => "Back / Cancel",
            Self::GoHome => "Home",
            Self::ToggleCalibration => "Build Mode",
            Self::CyclePointOfView => "Cycle View",
            Self::ExportLayout => "Export Layout",
        }
    }
}

/// Where an intent ends up.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Scene(SceneRequest),
    Build(BuildRequest),
    /// Orbit the camera by a drag delta.
    Orbit(Vec2),
    /// Pan the camera by a drag delta.
    Pan(Vec2),
    Zoom(f32),
    Hover(Option<String>),
    Ignored,
}

pub fn route_pointer(mode: &ModeSnapshot, intent: PointerIntent) -> Route {
    if mode.ui_wants_pointer || mode.game_active {
        return Route::Ignored;
    }

    if mode.calibration_active {
        return match intent {
            PointerIntent::Press {
                district: Some(id),
            } if !mode.holding_district => Route::Build(BuildRequest::PickUp(id)),
            PointerIntent::Release if mode.holding_district => Route::Build(BuildRequest::Place),
            PointerIntent::Drag { delta } if !mode.holding_district => Route::Pan(delta),
            PointerIntent::Hover { district } if !mode.holding_district => Route::Hover(district),
            _ => Route::Ignored,
        };
    }

    match intent {
        PointerIntent::Click {
            district: Some(id),
        } => Route::Scene(SceneRequest::SelectDistrict(id)),
        PointerIntent::Drag { delta } if !mode.orbit_locked() => Route::Orbit(delta),
        PointerIntent::Scroll { amount } if !mode.orbit_locked() => Route::Zoom(amount),
        PointerIntent::Hover { district } => Route::Hover(district),
        _ => Route::Ignored,
    }
}

pub fn route_key(mode: &ModeSnapshot, action: KeyAction) -> Route {
    if mode.ui_wants_keyboard {
        return Route::Ignored;
    }

    if mode.game_active {
        return match action {
            KeyAction::Escape => Route::Scene(SceneRequest::ExitGame),
            _ => Route::Ignored,
        };
    }

    if mode.calibration_active {
        return match action {
            KeyAction::Escape if mode.holding_district => Route::Build(BuildRequest::Cancel),
            KeyAction::Escape | KeyAction::ToggleCalibration => {
                Route::Scene(SceneRequest::ToggleCalibration)
            }
            KeyAction::ExportLayout => Route::Scene(SceneRequest::ExportLayout),
            KeyAction::GoHome | KeyAction::CyclePointOfView => Route::Ignored,
        };
    }

    match action {
        KeyAction::Escape | KeyAction::GoHome => Route::Scene(SceneRequest::GoHome),
        KeyAction::ToggleCalibration => Route::Scene(SceneRequest::ToggleCalibration),
        KeyAction::CyclePointOfView => {
            let next = match mode.point_of_view {
                PointOfView::ShipFollow => PointOfView::Overview,
                PointOfView::Overview | PointOfView::DistrictFocus => PointOfView::ShipFollow,
            };
            Route::Scene(SceneRequest::SetPointOfView(next))
        }
        KeyAction::ExportLayout => Route::Scene(SceneRequest::ExportLayout),
    }
}
