use bevy::prelude::*;

pub mod calibration_grid;
pub mod camera;
pub mod cursor;
pub mod district_render;
pub mod egui_input_guard;
pub mod input;
pub mod ship_render;

use scene::SceneSet;

use egui_input_guard::UiFocus;
use input::PointerGesture;

/// Window, GPU and input side of the metropolis. Requires `ScenePlugin` and
/// an egui context (the ui crate's plugin adds one).
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFocus>()
            .init_resource::<PointerGesture>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    setup_lighting,
                    district_render::spawn_district_meshes,
                ),
            )
            .add_systems(
                Update,
                (
                    egui_input_guard::capture_ui_focus,
                    input::update_pointer_state,
                    input::handle_pointer_input,
                    input::handle_keyboard_input,
                )
                    .chain()
                    .in_set(SceneSet::Input),
            )
            .add_systems(
                Update,
                (
                    district_render::sync_district_meshes,
                    district_render::draw_district_highlights,
                    ship_render::attach_ship_meshes,
                    calibration_grid::draw_calibration_grid,
                    cursor::apply_cursor_style,
                )
                    .in_set(SceneSet::Visual),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Dim blue ambient so towers read as a night skyline.
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.6, 0.7, 1.0),
        brightness: 250.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 6000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}
