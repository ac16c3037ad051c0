use bevy::prelude::*;

use scene::ships::Ship;

/// Give newly spawned ships a hull. Ships are spawned by the scene crate
/// without any visuals.
pub fn attach_ship_meshes(
    mut commands: Commands,
    ships: Query<(Entity, &Ship), Added<Ship>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if ships.is_empty() {
        return;
    }
    let hull = meshes.add(Cuboid::new(3.0, 1.5, 9.0));
    for (entity, ship) in &ships {
        let color = if ship.eligible_for_follow {
            Color::srgb(0.9, 0.9, 1.0)
        } else {
            Color::srgb(0.5, 0.5, 0.6)
        };
        commands.entity(entity).insert((
            Mesh3d(hull.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                emissive: LinearRgba::rgb(0.3, 0.6, 1.0),
                ..default()
            })),
            Visibility::default(),
        ));
    }
}
