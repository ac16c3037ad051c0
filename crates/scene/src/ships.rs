//! Ambient ships circling the skyline. Ship-follow camera targets them.
//!
//! Ships are referenced by [`ShipId`] and resolved through a query every
//! frame, so despawning one simply makes the follow target disappear.

use bevy::prelude::*;

use crate::catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub u32);

#[derive(Component, Debug, Clone, Copy)]
pub struct Ship {
    pub id: ShipId,
    pub eligible_for_follow: bool,
}

/// Circular patrol around `center` at a fixed altitude.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PatrolRoute {
    pub center: Vec3,
    pub radius: f32,
    pub altitude: f32,
    /// Radians per second; the sign picks the direction of travel.
    pub angular_speed: f32,
    /// Current angle along the circle.
    pub phase: f32,
}

/// World pose of a ship, as seen by the camera rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl ShipPose {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            position: transform.translation,
            rotation: transform.rotation,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

impl PatrolRoute {
    /// Pose on the circle at the current phase, facing the direction of travel.
    pub fn pose(&self) -> ShipPose {
        let (sin, cos) = self.phase.sin_cos();
        let position = self.center + Vec3::new(cos * self.radius, self.altitude, sin * self.radius);
        let heading = Vec3::new(-sin, 0.0, cos) * self.angular_speed.signum();
        let rotation = Transform::from_translation(position)
            .looking_to(heading, Vec3::Y)
            .rotation;
        ShipPose { position, rotation }
    }
}

/// Startup system: spawn the authored fleet. Rendering attaches meshes later.
pub fn spawn_ships(mut commands: Commands) {
    for (i, (eligible, route)) in catalog::authored_fleet().into_iter().enumerate() {
        let pose = route.pose();
        commands.spawn((
            Ship {
                id: ShipId(i as u32),
                eligible_for_follow: eligible,
            },
            route,
            Transform::from_translation(pose.position).with_rotation(pose.rotation),
        ));
    }
}

/// Advance every ship along its route.
pub fn advance_ships(time: Res<Time>, mut ships: Query<(&mut PatrolRoute, &mut Transform), With<Ship>>) {
    let dt = time.delta_secs();
    for (mut route, mut transform) in &mut ships {
        route.phase = (route.phase + route.angular_speed * dt).rem_euclid(std::f32::consts::TAU);
        let pose = route.pose();
        transform.translation = pose.position;
        transform.rotation = pose.rotation;
    }
}

/// Ids of ships the ship-follow camera may pick.
pub fn eligible_ship_ids<'a>(ships: impl IntoIterator<Item = &'a Ship>) -> Vec<ShipId> {
    let mut ids: Vec<ShipId> = ships
        .into_iter()
        .filter(|s| s.eligible_for_follow)
        .map(|s| s.id)
        .collect();
    // Query iteration order is not stable; sort so seeded picks are reproducible.
    ids.sort();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_faces_direction_of_travel() {
        let route = PatrolRoute {
            center: Vec3::ZERO,
            radius: 10.0,
            altitude: 5.0,
            angular_speed: 1.0,
            phase: 0.0,
        };
        let pose = route.pose();
        assert!((pose.position - Vec3::new(10.0, 5.0, 0.0)).length() < 1e-4);
        // Counter-clockwise in X/Z at phase 0 heads toward +Z.
        assert!((pose.forward() - Vec3::Z).length() < 1e-4);

        let reverse = PatrolRoute {
            angular_speed: -1.0,
            ..route
        };
        assert!((reverse.pose().forward() - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn test_eligible_ids_sorted_and_filtered() {
        let ships = [
            Ship { id: ShipId(4), eligible_for_follow: true },
            Ship { id: ShipId(1), eligible_for_follow: false },
            Ship { id: ShipId(2), eligible_for_follow: true },
        ];
        assert_eq!(eligible_ship_ids(&ships), vec![ShipId(2), ShipId(4)]);
    }
}
