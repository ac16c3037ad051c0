use bevy::prelude::*;

use scene::app_state::SceneState;
use scene::build_mode::BuildMode;
use scene::district::{District, DistrictKind, DistrictRegistry, DistrictTag};
use scene::pointer::PointerState;

const HOVER_COLOR: Color = Color::srgba(0.4, 0.9, 1.0, 0.9);
const SELECTED_COLOR: Color = Color::srgba(1.0, 0.8, 0.3, 0.9);
const HELD_COLOR: Color = Color::srgba(1.0, 0.4, 0.8, 0.95);
const DIRTY_COLOR: Color = Color::srgba(1.0, 0.5, 0.2, 0.6);

/// Links a spawned tower to its district by id.
#[derive(Component, Debug)]
pub struct DistrictMesh {
    pub id: String,
}

/// Footprint and height of a district's tower.
pub fn tower_size(district: &District) -> Vec3 {
    match district.kind {
        DistrictKind::Major => {
            let height = match district.tag {
                DistrictTag::Ai => 50.0,
                DistrictTag::Game => 22.0,
                DistrictTag::Showcase => 34.0,
                DistrictTag::Contact | DistrictTag::Info => 26.0,
            };
            Vec3::new(16.0, height, 16.0)
        }
        DistrictKind::Minor => Vec3::new(10.0, 12.0, 10.0),
    }
}

fn tower_color(district: &District) -> Color {
    match (district.kind, district.tag) {
        (DistrictKind::Minor, _) => Color::srgb(0.22, 0.24, 0.3),
        (_, DistrictTag::Ai) => Color::srgb(0.45, 0.3, 0.9),
        (_, DistrictTag::Contact) => Color::srgb(0.2, 0.75, 0.6),
        (_, DistrictTag::Game) => Color::srgb(0.95, 0.35, 0.45),
        (_, DistrictTag::Showcase) => Color::srgb(0.25, 0.55, 0.95),
        (_, DistrictTag::Info) => Color::srgb(0.7, 0.7, 0.8),
    }
}

/// Tower centre for a district standing on the ground at `position`.
fn tower_translation(position: Vec3, size: Vec3) -> Vec3 {
    position + Vec3::Y * (size.y / 2.0)
}

pub fn spawn_district_meshes(
    mut commands: Commands,
    districts: Res<DistrictRegistry>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for district in districts.iter() {
        let size = tower_size(district);
        commands.spawn((
            DistrictMesh {
                id: district.id.clone(),
            },
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: tower_color(district),
                perceptual_roughness: 0.6,
                ..default()
            })),
            Transform::from_translation(tower_translation(district.position, size)),
        ));
    }

    let ground = meshes.add(Plane3d::default().mesh().size(260.0, 260.0));
    commands.spawn((
        Mesh3d(ground),
        MeshMaterial3d(materials.add(Color::srgb(0.06, 0.07, 0.1))),
        Transform::from_xyz(0.0, -0.05, 0.0),
    ));
}

/// Follow build-mode moves. Only runs work when the registry changed.
pub fn sync_district_meshes(
    districts: Res<DistrictRegistry>,
    mut towers: Query<(&DistrictMesh, &mut Transform)>,
) {
    if !districts.is_changed() {
        return;
    }
    for (tower, mut transform) in &mut towers {
        let Some(district) = districts.get(&tower.id) else {
            continue;
        };
        let next = tower_translation(district.position, tower_size(district));
        if transform.translation != next {
            transform.translation = next;
        }
    }
}

fn outline(gizmos: &mut Gizmos, district: &District, color: Color, grow: f32) {
    let size = tower_size(district) + Vec3::splat(grow);
    gizmos.cuboid(
        Transform::from_translation(tower_translation(district.position, tower_size(district)))
            .with_scale(size),
        color,
    );
}

pub fn draw_district_highlights(
    state: Res<SceneState>,
    build: Res<BuildMode>,
    pointer: Res<PointerState>,
    districts: Res<DistrictRegistry>,
    mut gizmos: Gizmos,
) {
    if state.calibration_active {
        for district in districts.iter().filter(|d| d.is_dirty) {
            outline(&mut gizmos, district, DIRTY_COLOR, 1.0);
        }
    }
    if let Some(district) = build.held_id().and_then(|id| districts.get(id)) {
        outline(&mut gizmos, district, HELD_COLOR, 3.0);
        return;
    }
    if let Some(district) = state.selected_district.as_deref().and_then(|id| districts.get(id)) {
        outline(&mut gizmos, district, SELECTED_COLOR, 2.0);
    }
    if let Some(district) = pointer.hovered.as_deref().and_then(|id| districts.get(id)) {
        if state.selected_district.as_deref() != Some(district.id.as_str()) {
            outline(&mut gizmos, district, HOVER_COLOR, 2.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majors_taller_than_minors() {
        let registry = DistrictRegistry::default();
        let tallest_minor = registry
            .iter()
            .filter(|d| !d.is_major())
            .map(|d| tower_size(d).y)
            .fold(0.0, f32::max);
        assert!(registry
            .iter()
            .filter(|d| d.is_major())
            .all(|d| tower_size(d).y > tallest_minor));
    }

    #[test]
    fn test_tower_stands_on_ground() {
        let size = Vec3::new(10.0, 20.0, 10.0);
        let t = tower_translation(Vec3::new(5.0, 0.0, -5.0), size);
        assert_eq!(t, Vec3::new(5.0, 10.0, -5.0));
    }
}
