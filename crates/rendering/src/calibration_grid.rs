use bevy::math::Isometry3d;
use bevy::prelude::*;

use scene::app_state::SceneState;
use scene::build_mode::BuildMode;
use scene::grid::GridSpec;
use scene::pointer::PointerState;

const GRID_COLOR: Color = Color::srgba(0.3, 0.8, 1.0, 0.35);
const BORDER_COLOR: Color = Color::srgba(0.3, 0.8, 1.0, 0.9);
const CELL_COLOR: Color = Color::srgba(1.0, 0.4, 0.8, 0.9);

/// Grid lines drawn just above the ground to avoid z-fighting.
const LIFT: f32 = 0.1;

/// Line coordinates along one axis, from `-half` to `half` inclusive.
pub fn grid_line_offsets(grid: &GridSpec) -> Vec<f32> {
    let half = grid.half_extent();
    let cell = grid.cell_size();
    (0..=grid.divisions).map(|i| -half + i as f32 * cell).collect()
}

/// Build-mode grid, plus the snapped cell under a held district.
pub fn draw_calibration_grid(
    state: Res<SceneState>,
    grid: Res<GridSpec>,
    build: Res<BuildMode>,
    pointer: Res<PointerState>,
    mut gizmos: Gizmos,
) {
    if !state.calibration_active {
        return;
    }
    let y = grid.height + LIFT;
    let half = grid.half_extent();
    let offsets = grid_line_offsets(&grid);
    let last = offsets.len().saturating_sub(1);
    for (i, &o) in offsets.iter().enumerate() {
        let color = if i == 0 || i == last { BORDER_COLOR } else { GRID_COLOR };
        gizmos.line(Vec3::new(o, y, -half), Vec3::new(o, y, half), color);
        gizmos.line(Vec3::new(-half, y, o), Vec3::new(half, y, o), color);
    }

    if !build.is_holding() {
        return;
    }
    if let Some(hit) = pointer.ground_hit {
        let cell = grid.cell_size();
        let center = grid.snap(hit.x, hit.z);
        gizmos.rect(
            Isometry3d::new(
                Vec3::new(center.x, y + LIFT, center.y),
                Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
            ),
            Vec2::splat(cell),
            CELL_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_lines_cover_extent() {
        let grid = GridSpec::default();
        let offsets = grid_line_offsets(&grid);
        assert_eq!(offsets.len(), grid.divisions as usize + 1);
        assert!((offsets[0] + grid.half_extent()).abs() < 1e-4);
        assert!((offsets[offsets.len() - 1] - grid.half_extent()).abs() < 1e-3);
    }
}
