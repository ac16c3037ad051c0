//! Window input to scene intents.
//!
//! Raw mouse and keyboard state is classified here (click vs. drag, wheel,
//! hover, bound keys) and handed to the scene crate's router, which decides
//! per mode where each intent goes. This module only performs the routed
//! result: it sends events or nudges the user orbit.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use scene::app_state::SceneState;
use scene::build_mode::{BuildMode, BuildRequest};
use scene::camera_rig::{OrbitControls, RigCamera};
use scene::camera_target::UserOrbit;
use scene::config::DISTRICT_PICK_RADIUS;
use scene::district::DistrictRegistry;
use scene::grid::GridSpec;
use scene::idle::UserActivity;
use scene::input_router::{route_key, route_pointer, ModeSnapshot, PointerIntent, Route};
use scene::keybindings::KeyBindings;
use scene::pointer::{ground_hit, pick_district, PointerState};
use scene::requests::SceneRequest;

use crate::camera::{camera_yaw, orbit_by, pan_by, scroll_lines, zoom_factor};
use crate::egui_input_guard::UiFocus;

/// Movement in logical pixels before a press turns into a drag.
const DRAG_THRESHOLD: f32 = 5.0;

/// Left-button state: tells a click apart from a drag.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct PointerGesture {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    /// Set once the pointer has moved beyond the threshold since the press.
    pub is_dragging: bool,
    /// District under the pointer when the button went down.
    pub press_district: Option<String>,
}

impl PointerGesture {
    pub fn press(&mut self, pos: Vec2, district: Option<String>) -> PointerIntent {
        self.pressed = true;
        self.start_pos = pos;
        self.last_pos = pos;
        self.is_dragging = false;
        self.press_district = district.clone();
        PointerIntent::Press { district }
    }

    /// Pointer moved while pressed. Yields a drag delta once past the threshold.
    pub fn move_to(&mut self, pos: Vec2) -> Option<PointerIntent> {
        if !self.pressed {
            return None;
        }
        if !self.is_dragging {
            if pos.distance(self.start_pos) <= DRAG_THRESHOLD {
                return None;
            }
            self.is_dragging = true;
        }
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        (delta != Vec2::ZERO).then_some(PointerIntent::Drag { delta })
    }

    /// Button released. A release without a drag is also a click.
    pub fn release(&mut self) -> Vec<PointerIntent> {
        if !self.pressed {
            return Vec::new();
        }
        let mut out = vec![PointerIntent::Release];
        if !self.is_dragging {
            out.push(PointerIntent::Click {
                district: self.press_district.take(),
            });
        }
        *self = Self::default();
        out
    }
}

/// Camera ray through the cursor, if the cursor is in the window.
pub fn cursor_ray(window: &Window, camera: &Camera, transform: &GlobalTransform) -> Option<Ray3d> {
    let screen_pos = window.cursor_position()?;
    camera.viewport_to_world(transform, screen_pos).ok()
}

/// Refresh [`PointerState`]: the ground hit while a district is held and the
/// district under the cursor otherwise.
#[allow(clippy::too_many_arguments)]
pub fn update_pointer_state(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<RigCamera>>,
    state: Res<SceneState>,
    build: Res<BuildMode>,
    districts: Res<DistrictRegistry>,
    grid: Res<GridSpec>,
    focus: Res<UiFocus>,
    mut pointer: ResMut<PointerState>,
) {
    let ray = match (windows.get_single(), camera_q.get_single()) {
        (Ok(window), Ok((camera, transform))) => cursor_ray(window, camera, transform),
        _ => None,
    };

    let ground = if build.is_holding() {
        ray.and_then(|r| ground_hit(r, grid.height))
    } else {
        None
    };

    let candidate = ray.and_then(|r| {
        pick_district(r, &districts, DISTRICT_PICK_RADIUS, |d| {
            state.calibration_active || d.is_major()
        })
        .map(|d| d.id.clone())
    });
    let mode = ModeSnapshot::capture(&state, &build).with_ui(focus.wants_pointer, focus.wants_keyboard);
    let hovered = match route_pointer(&mode, PointerIntent::Hover { district: candidate }) {
        Route::Hover(id) => id,
        _ => None,
    };

    if pointer.ground_hit != ground || pointer.hovered != hovered {
        pointer.ground_hit = ground;
        pointer.hovered = hovered;
    }
}

/// Classify mouse input and perform whatever the router decides.
#[allow(clippy::too_many_arguments)]
pub fn handle_pointer_input(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<&Transform, With<RigCamera>>,
    mut wheel: EventReader<MouseWheel>,
    mut motion: EventReader<MouseMotion>,
    state: Res<SceneState>,
    build: Res<BuildMode>,
    pointer: Res<PointerState>,
    focus: Res<UiFocus>,
    controls: Res<OrbitControls>,
    mut gesture: ResMut<PointerGesture>,
    mut user_orbit: ResMut<UserOrbit>,
    mut scene_requests: EventWriter<SceneRequest>,
    mut build_requests: EventWriter<BuildRequest>,
    mut activity: EventWriter<UserActivity>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let mode = ModeSnapshot::capture(&state, &build).with_ui(focus.wants_pointer, focus.wants_keyboard);
    let cursor = window.cursor_position();
    let mut intents = Vec::new();

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(pos) = cursor {
            // Presses that start on a panel never become world gestures.
            if !focus.wants_pointer {
                intents.push(gesture.press(pos, pointer.hovered.clone()));
            }
        }
    }
    if let Some(pos) = cursor {
        intents.extend(gesture.move_to(pos));
    }
    if buttons.just_released(MouseButton::Left) {
        intents.extend(gesture.release());
    }
    let lines = scroll_lines(&mut wheel);
    if lines != 0.0 {
        intents.push(PointerIntent::Scroll { amount: lines });
    }

    let moved = motion.read().count() > 0;
    if moved || !intents.is_empty() {
        activity.send(UserActivity);
    }

    let yaw = cameras.get_single().map(camera_yaw).unwrap_or(0.0);
    for intent in intents {
        match route_pointer(&mode, intent) {
            Route::Scene(request) => {
                scene_requests.send(request);
            }
            Route::Build(request) => {
                build_requests.send(request);
            }
            Route::Orbit(delta) if controls.orbit_enabled => orbit_by(&mut user_orbit, delta),
            Route::Pan(delta) if controls.pan_enabled => pan_by(&mut user_orbit, delta, yaw),
            Route::Zoom(lines) if controls.orbit_enabled => user_orbit.zoom_by(zoom_factor(lines)),
            _ => {}
        }
    }
}

/// Bound keys through the router.
#[allow(clippy::too_many_arguments)]
pub fn handle_keyboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    state: Res<SceneState>,
    build: Res<BuildMode>,
    focus: Res<UiFocus>,
    mut scene_requests: EventWriter<SceneRequest>,
    mut build_requests: EventWriter<BuildRequest>,
    mut activity: EventWriter<UserActivity>,
) {
    if keys.get_just_pressed().next().is_some() {
        activity.send(UserActivity);
    }
    let mode = ModeSnapshot::capture(&state, &build).with_ui(focus.wants_pointer, focus.wants_keyboard);
    for action in bindings.just_pressed(&keys) {
        match route_key(&mode, action) {
            Route::Scene(request) => {
                scene_requests.send(request);
            }
            Route::Build(request) => {
                build_requests.send(request);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_without_motion_is_click() {
        let mut g = PointerGesture::default();
        g.press(Vec2::new(100.0, 100.0), Some("oracle-spire".into()));
        assert_eq!(g.move_to(Vec2::new(102.0, 101.0)), None);
        let out = g.release();
        assert_eq!(
            out,
            vec![
                PointerIntent::Release,
                PointerIntent::Click {
                    district: Some("oracle-spire".into())
                }
            ]
        );
        assert!(!g.pressed);
    }

    #[test]
    fn test_drag_past_threshold_is_not_click() {
        let mut g = PointerGesture::default();
        g.press(Vec2::ZERO, None);
        let first = g.move_to(Vec2::new(10.0, 0.0));
        assert_eq!(
            first,
            Some(PointerIntent::Drag {
                delta: Vec2::new(10.0, 0.0)
            })
        );
        assert_eq!(
            g.move_to(Vec2::new(12.0, 3.0)),
            Some(PointerIntent::Drag {
                delta: Vec2::new(2.0, 3.0)
            })
        );
        assert_eq!(g.move_to(Vec2::new(12.0, 3.0)), None);
        assert_eq!(g.release(), vec![PointerIntent::Release]);
    }

    #[test]
    fn test_motion_without_press_is_ignored() {
        let mut g = PointerGesture::default();
        assert_eq!(g.move_to(Vec2::new(50.0, 50.0)), None);
        assert!(g.release().is_empty());
    }
}
