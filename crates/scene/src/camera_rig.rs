//! Camera rig: exponential smoothing toward the resolved target.
//!
//! Each frame the rig lerps the live camera position toward the target and
//! slerps its orientation toward a freshly built look-at quaternion, using the
//! frame-rate independent factor
//!
//!   `t = 1 - exp(-rate * multiplier * dt)`
//!
//! The multiplier is raised while a transition is in flight so requested moves
//! snap faster than ambient drift. Convergence is edge-triggered: it fires once
//! per transition and re-arms only when `SceneState::transition_seq` changes.

use bevy::prelude::*;

use crate::app_state::{PointOfView, SceneState};
use crate::build_mode::BuildMode;
use crate::camera_target::{resolve_target, AmbientMotion, CameraTarget, TargetMode, UserOrbit};
use crate::config::{
    AUTO_ROTATE_SPEED, CONVERGENCE_ANGLE_DEG, CONVERGENCE_DISTANCE, FOLLOW_CONVERGENCE_ANGLE_DEG,
    FOLLOW_CONVERGENCE_DISTANCE,
};
use crate::district::DistrictRegistry;
use crate::pointer::PointerState;
use crate::ships::{Ship, ShipPose};

/// Marker for the camera entity driven by the rig.
#[derive(Component, Debug, Default)]
pub struct RigCamera;

/// Sent by the rig when it reaches the target of transition `seq`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraConverged {
    pub seq: u64,
}

/// Tunable smoothing parameters.
#[derive(Resource, Debug, Clone, Copy)]
pub struct RigConfig {
    /// Base smoothing rate for position (higher = snappier).
    pub position_rate: f32,
    /// Base smoothing rate for orientation.
    pub rotation_rate: f32,
    /// Rate multiplier while a transition is in flight.
    pub focus_multiplier: f32,
    pub convergence_distance: f32,
    pub follow_convergence_distance: f32,
    /// Radians.
    pub convergence_angle: f32,
    /// Radians. A moving ship keeps the smoothed camera a few degrees behind.
    pub follow_convergence_angle: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            position_rate: 2.5,
            rotation_rate: 3.0,
            focus_multiplier: 2.0,
            convergence_distance: CONVERGENCE_DISTANCE,
            follow_convergence_distance: FOLLOW_CONVERGENCE_DISTANCE,
            convergence_angle: CONVERGENCE_ANGLE_DEG.to_radians(),
            follow_convergence_angle: FOLLOW_CONVERGENCE_ANGLE_DEG.to_radians(),
        }
    }
}

/// Which user camera controls are currently allowed.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrbitControls {
    pub orbit_enabled: bool,
    pub pan_enabled: bool,
}

impl OrbitControls {
    pub fn for_mode(state: &SceneState, holding_district: bool) -> Self {
        let locked = state.game_active
            || state.animation_in_flight
            || state.point_of_view == PointOfView::ShipFollow
            || holding_district;
        if locked {
            return Self::default();
        }
        if state.calibration_active {
            return Self {
                orbit_enabled: false,
                pan_enabled: true,
            };
        }
        Self {
            orbit_enabled: true,
            pan_enabled: false,
        }
    }
}

/// Exponential interpolation factor in `[0, 1]` for a given rate and frame time.
#[inline]
pub fn exp_lerp_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt.max(0.0)).exp()
}

/// Orientation of a camera at `from` looking at `to`.
pub fn look_rotation(from: Vec3, to: Vec3) -> Quat {
    Transform::from_translation(from).looking_at(to, Vec3::Y).rotation
}

/// Per-frame rig state that is not derived from `SceneState`.
#[derive(Resource, Debug, Default)]
pub struct CameraRig {
    armed: bool,
    seen_seq: u64,
    pub ambient: AmbientMotion,
    /// The last target the rig steered toward (after user orbit), for gizmos and UI.
    pub last_target: Option<CameraTarget>,
}

impl CameraRig {
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Move `camera` one frame toward `target`. Returns `true` exactly once per
    /// transition, on the frame the camera first sits inside both tolerances.
    pub fn step(
        &mut self,
        camera: &mut Transform,
        target: &CameraTarget,
        config: &RigConfig,
        state: &SceneState,
        dt: f32,
    ) -> bool {
        if state.transition_seq != self.seen_seq {
            self.seen_seq = state.transition_seq;
            self.armed = true;
        }
        self.last_target = Some(*target);

        let multiplier = if state.animation_in_flight {
            config.focus_multiplier
        } else {
            1.0
        };
        let move_t = exp_lerp_factor(config.position_rate * multiplier, dt);
        let turn_t = exp_lerp_factor(config.rotation_rate * multiplier, dt);

        camera.translation = camera.translation.lerp(target.position, move_t);
        let desired = look_rotation(camera.translation, target.look_at);
        camera.rotation = camera.rotation.slerp(desired, turn_t).normalize();

        let (tolerance, max_angle) = if target.mode == TargetMode::ShipFollow {
            (config.follow_convergence_distance, config.follow_convergence_angle)
        } else {
            (config.convergence_distance, config.convergence_angle)
        };
        let final_rotation = look_rotation(target.position, target.look_at);
        let distance = camera.translation.distance(target.position);
        let angle = camera.rotation.angle_between(final_rotation);

        if self.armed && distance < tolerance && angle < max_angle {
            self.armed = false;
            return true;
        }
        false
    }
}

/// System: resolve the target, steer the rig camera and report convergence.
#[allow(clippy::too_many_arguments)]
pub fn drive_camera_rig(
    time: Res<Time>,
    state: Res<SceneState>,
    districts: Res<DistrictRegistry>,
    pointer: Res<PointerState>,
    user_orbit: Res<UserOrbit>,
    build: Res<BuildMode>,
    config: Res<RigConfig>,
    mut rig: ResMut<CameraRig>,
    mut controls: ResMut<OrbitControls>,
    ships: Query<(&Ship, &Transform), Without<RigCamera>>,
    mut cameras: Query<&mut Transform, With<RigCamera>>,
    mut converged: EventWriter<CameraConverged>,
) {
    let next_controls = OrbitControls::for_mode(&state, build.is_holding());
    if *controls != next_controls {
        *controls = next_controls;
    }

    // The minigame drives its own camera.
    if state.game_active {
        return;
    }
    let Ok(mut camera) = cameras.get_single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    if state.transition_seq != rig.seen_seq {
        rig.ambient.auto_rotate_angle = 0.0;
    }
    if state.idle {
        rig.ambient.auto_rotate_angle =
            (rig.ambient.auto_rotate_angle + AUTO_ROTATE_SPEED * dt).rem_euclid(std::f32::consts::TAU);
    }
    rig.ambient.hover = pointer
        .hovered
        .as_deref()
        .and_then(|id| districts.get(id))
        .map(|d| d.position);

    let ship = state.followed_ship.and_then(|id| {
        ships
            .iter()
            .find(|(ship, _)| ship.id == id)
            .map(|(_, transform)| ShipPose::from_transform(transform))
    });

    let ambient = rig.ambient;
    let target = user_orbit.apply(resolve_target(&state, &districts, ship, &ambient));

    if rig.step(&mut camera, &target, &config, &state, dt) {
        debug!("camera converged for transition {}", state.transition_seq);
        converged.send(CameraConverged {
            seq: state.transition_seq,
        });
    }
}

/// System: hand convergence back to the state machine. Stale events from an
/// earlier transition are ignored.
pub fn handle_camera_converged(
    mut events: EventReader<CameraConverged>,
    mut state: ResMut<SceneState>,
    dispatch: Res<crate::overlay::OverlayDispatch>,
    districts: Res<DistrictRegistry>,
) {
    for event in events.read() {
        if event.seq != state.transition_seq {
            continue;
        }
        state.on_camera_converged(&dispatch, &districts);
    }
}
