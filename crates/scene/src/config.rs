use bevy::math::Vec3;

/// Edge length of the square placement grid, in world units.
pub const GRID_SIZE: f32 = 250.0;
/// Number of cells along each grid axis. Cell size is `GRID_SIZE / GRID_DIVISIONS`.
pub const GRID_DIVISIONS: u32 = 25;
/// World-space Y level of the ground plane that build-mode rays are cast against.
pub const GRID_HEIGHT: f32 = 0.0;

/// Default camera position when nothing is selected.
pub const OVERVIEW_POSITION: Vec3 = Vec3::new(0.0, 150.0, 230.0);
/// Elevated, almost top-down position used while calibrating.
/// The small Z offset keeps the look-at direction off the world up axis.
pub const CALIBRATION_POSITION: Vec3 = Vec3::new(0.0, 320.0, 40.0);

/// Standard orbit offset around a district without an authored focus point.
pub const DISTRICT_ORBIT_YAW: f32 = 0.6;
pub const DISTRICT_ORBIT_PITCH: f32 = 0.55;
pub const DISTRICT_ORBIT_DISTANCE: f32 = 70.0;

/// Camera offset in the followed ship's local frame (behind and above).
/// Bevy's forward is -Z, so "behind" is +Z.
pub const SHIP_FOLLOW_OFFSET: Vec3 = Vec3::new(0.0, 7.0, 22.0);
/// How far ahead of the ship, along its forward vector, the camera looks.
pub const SHIP_LOOK_AHEAD: f32 = 30.0;

/// Position tolerance for convergence, in world units.
pub const CONVERGENCE_DISTANCE: f32 = 0.5;
/// Orientation tolerance for convergence, in degrees.
pub const CONVERGENCE_ANGLE_DEG: f32 = 3.0;
/// Looser position tolerance while following a moving ship, where exponential
/// smoothing trails the target by a steady amount.
pub const FOLLOW_CONVERGENCE_DISTANCE: f32 = 6.0;
pub const FOLLOW_CONVERGENCE_ANGLE_DEG: f32 = 12.0;

/// Vertical offset above the launching district where the minigame spawns the player.
pub const GAME_SPAWN_HEIGHT: f32 = 40.0;

/// Seconds without user input before the overview starts auto-rotating.
pub const IDLE_SECONDS: f32 = 20.0;
/// Auto-rotate speed in radians per second.
pub const AUTO_ROTATE_SPEED: f32 = 0.05;
/// Fraction of the way the overview look-at drifts toward a hovered district.
pub const HOVER_DRIFT: f32 = 0.08;

/// Radius of the sphere used to pick a district under the pointer.
pub const DISTRICT_PICK_RADIUS: f32 = 12.0;
