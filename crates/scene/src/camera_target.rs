//! Pure camera target resolution.
//!
//! [`resolve_target`] is a function of the current state only, so the rig is
//! stateless between frames with respect to *where* it is going: a new
//! transition just produces a different target on the next call.

use bevy::prelude::*;

use crate::app_state::{PointOfView, SceneState};
use crate::config::{
    CALIBRATION_POSITION, DISTRICT_ORBIT_DISTANCE, DISTRICT_ORBIT_PITCH, DISTRICT_ORBIT_YAW,
    HOVER_DRIFT, OVERVIEW_POSITION, SHIP_FOLLOW_OFFSET, SHIP_LOOK_AHEAD,
};
use crate::district::DistrictRegistry;
use crate::ships::ShipPose;

const MIN_PITCH: f32 = 5.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0;
const MIN_ZOOM: f32 = 0.35;
const MAX_ZOOM: f32 = 2.5;

/// Which rule produced a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    Calibration,
    ShipFollow,
    District,
    Overview,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub position: Vec3,
    pub look_at: Vec3,
    pub mode: TargetMode,
}

/// Motion that is not a transition: idle auto-rotation and hover drift.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AmbientMotion {
    pub auto_rotate_angle: f32,
    /// Ground position of the district under the pointer, if any.
    pub hover: Option<Vec3>,
}

/// Spherical to cartesian offset from a focus point.
pub fn orbit_offset(distance: f32, yaw: f32, pitch: f32) -> Vec3 {
    let x = distance * pitch.cos() * yaw.sin();
    let y = distance * pitch.sin();
    let z = distance * pitch.cos() * yaw.cos();
    Vec3::new(x, y, z)
}

/// Inverse of [`orbit_offset`]: `(distance, yaw, pitch)`.
pub fn offset_to_orbit(offset: Vec3) -> (f32, f32, f32) {
    let distance = offset.length();
    if distance <= f32::EPSILON {
        return (0.0, 0.0, 0.0);
    }
    let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
    let yaw = offset.x.atan2(offset.z);
    (distance, yaw, pitch)
}

pub fn overview_target(ambient: &AmbientMotion) -> CameraTarget {
    let position = Quat::from_rotation_y(ambient.auto_rotate_angle) * OVERVIEW_POSITION;
    let look_at = match ambient.hover {
        Some(hover) => Vec3::ZERO.lerp(Vec3::new(hover.x, 0.0, hover.z), HOVER_DRIFT),
        None => Vec3::ZERO,
    };
    CameraTarget {
        position,
        look_at,
        mode: TargetMode::Overview,
    }
}

/// Resolve where the camera should be, first matching rule wins:
/// calibration, ship-follow, selected district, overview.
pub fn resolve_target(
    state: &SceneState,
    districts: &DistrictRegistry,
    ship: Option<ShipPose>,
    ambient: &AmbientMotion,
) -> CameraTarget {
    if state.calibration_active {
        return CameraTarget {
            position: CALIBRATION_POSITION,
            look_at: Vec3::ZERO,
            mode: TargetMode::Calibration,
        };
    }

    if state.point_of_view == PointOfView::ShipFollow {
        if let Some(ship) = ship {
            return CameraTarget {
                position: ship.position + ship.rotation * SHIP_FOLLOW_OFFSET,
                look_at: ship.position + ship.forward() * SHIP_LOOK_AHEAD,
                mode: TargetMode::ShipFollow,
            };
        }
        return overview_target(ambient);
    }

    if let Some(district) = state.selected_district.as_deref().and_then(|id| districts.get(id)) {
        if let Some(focus) = district.focus {
            return CameraTarget {
                position: focus.position,
                look_at: focus.look_at,
                mode: TargetMode::District,
            };
        }
        return CameraTarget {
            position: district.position
                + orbit_offset(DISTRICT_ORBIT_DISTANCE, DISTRICT_ORBIT_YAW, DISTRICT_ORBIT_PITCH),
            look_at: district.position,
            mode: TargetMode::District,
        };
    }

    overview_target(ambient)
}

/// User orbit/zoom/pan adjustments layered on top of the resolved target
/// while orbit controls are enabled. Reset on every transition.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct UserOrbit {
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    pub pan: Vec3,
}

impl Default for UserOrbit {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
            pan: Vec3::ZERO,
        }
    }
}

impl UserOrbit {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn apply(&self, target: CameraTarget) -> CameraTarget {
        if self.is_identity() {
            return target;
        }
        let (distance, yaw, pitch) = offset_to_orbit(target.position - target.look_at);
        let pitch = (pitch + self.pitch).clamp(MIN_PITCH, MAX_PITCH);
        let offset = orbit_offset(distance * self.zoom, yaw + self.yaw, pitch);
        let look_at = target.look_at + self.pan;
        CameraTarget {
            position: look_at + offset,
            look_at,
            mode: target.mode,
        }
    }
}
