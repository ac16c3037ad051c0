//! Pointer raycasting: ground-plane hits for build mode and district picking.
//!
//! The rendering crate turns the window cursor into a [`Ray3d`] each frame and
//! stores the results in [`PointerState`]; everything here is pure math.

use bevy::prelude::*;

use crate::district::{District, DistrictRegistry};

/// What the pointer is over this frame.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PointerState {
    /// Intersection with the ground plane. Only tracked while a district is held.
    pub ground_hit: Option<Vec3>,
    /// District under the pointer, if any.
    pub hovered: Option<String>,
}

/// Intersect `ray` with the horizontal plane at `height`. `None` when the ray
/// is parallel to the plane or points away from it.
pub fn ground_hit(ray: Ray3d, height: f32) -> Option<Vec3> {
    let distance = ray.intersect_plane(Vec3::Y * height, InfinitePlane3d::new(Vec3::Y))?;
    Some(ray.get_point(distance))
}

/// Nearest district whose pick sphere the ray passes through.
pub fn pick_district<'a>(
    ray: Ray3d,
    districts: &'a DistrictRegistry,
    radius: f32,
    filter: impl Fn(&District) -> bool,
) -> Option<&'a District> {
    let dir = *ray.direction;
    let mut best: Option<(f32, &District)> = None;
    for district in districts.iter().filter(|d| filter(d)) {
        let to_center = district.position - ray.origin;
        let along = to_center.dot(dir);
        if along < 0.0 {
            continue;
        }
        let closest = ray.origin + dir * along;
        if closest.distance_squared(district.position) > radius * radius {
            continue;
        }
        if best.map_or(true, |(t, _)| along < t) {
            best = Some((along, district));
        }
    }
    best.map(|(_, d)| d)
}
