use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use scene::SceneSet;

pub mod calibration_panel;
pub mod hud;
pub mod overlay_panels;
pub mod status_notice;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin);
        }
        app.add_systems(Startup, theme::apply_neon_theme).add_systems(
            Update,
            (
                hud::hud_ui,
                overlay_panels::overlay_panel_ui,
                calibration_panel::calibration_panel_ui,
                status_notice::status_notice_ui,
            )
                .chain()
                .in_set(SceneSet::Visual),
        );
    }
}
