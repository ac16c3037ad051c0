use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use scene::camera_rig::RigCamera;
use scene::camera_target::UserOrbit;
use scene::config::OVERVIEW_POSITION;

const ORBIT_SENSITIVITY: f32 = 0.005;
const ZOOM_SPEED: f32 = 0.12;
/// World units per logical pixel of pan drag.
const PAN_SCALE: f32 = 0.6;
/// Pan offsets are kept inside this radius around the scene origin.
const MAX_PAN: f32 = 200.0;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        RigCamera,
        Transform::from_translation(OVERVIEW_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Drag delta to yaw/pitch. Horizontal drag turns, vertical drag tilts.
pub fn orbit_by(orbit: &mut UserOrbit, delta: Vec2) {
    orbit.yaw -= delta.x * ORBIT_SENSITIVITY;
    orbit.pitch += delta.y * ORBIT_SENSITIVITY;
}

/// Drag delta to a ground-plane pan, relative to the camera heading.
pub fn pan_by(orbit: &mut UserOrbit, delta: Vec2, camera_yaw: f32) {
    let (sin_yaw, cos_yaw) = camera_yaw.sin_cos();
    let world_x = -delta.x * cos_yaw - delta.y * sin_yaw;
    let world_z = delta.x * sin_yaw - delta.y * cos_yaw;
    orbit.pan += Vec3::new(world_x, 0.0, world_z) * PAN_SCALE;
    let flat = Vec2::new(orbit.pan.x, orbit.pan.z).clamp_length_max(MAX_PAN);
    orbit.pan = Vec3::new(flat.x, 0.0, flat.y);
}

/// Scroll lines to a zoom factor. Scrolling up moves the camera closer.
pub fn zoom_factor(lines: f32) -> f32 {
    (1.0 - lines * ZOOM_SPEED).max(0.1)
}

/// Heading of the camera around the Y axis, matching the orbit yaw convention.
pub fn camera_yaw(transform: &Transform) -> f32 {
    let back = transform.back();
    back.x.atan2(back.z)
}

/// Wheel events in lines, summed for this frame.
pub fn scroll_lines(events: &mut EventReader<MouseWheel>) -> f32 {
    events
        .read()
        .map(|evt| match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        })
        .sum()
}
