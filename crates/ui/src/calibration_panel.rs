use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use scene::app_state::SceneState;
use scene::build_mode::{BuildMode, BuildRequest};
use scene::district::DistrictRegistry;
use scene::requests::SceneRequest;

use crate::theme;

/// `(id, title)` of every district moved away from its authored spot.
pub fn dirty_districts(districts: &DistrictRegistry) -> Vec<(&str, &str)> {
    districts
        .iter()
        .filter(|d| d.is_dirty)
        .map(|d| (d.id.as_str(), d.title.as_str()))
        .collect()
}

pub fn calibration_panel_ui(
    mut contexts: EguiContexts,
    state: Res<SceneState>,
    build: Res<BuildMode>,
    districts: Res<DistrictRegistry>,
    mut scene_requests: EventWriter<SceneRequest>,
    mut build_requests: EventWriter<BuildRequest>,
) {
    if !state.calibration_active {
        return;
    }
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    egui::Window::new("Build Mode")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 44.0))
        .default_width(240.0)
        .collapsible(true)
        .resizable(false)
        .show(ctx, |ui| {
            match build.held().and_then(|h| districts.get(&h.id).map(|d| (h, d))) {
                Some((held, district)) => {
                    ui.label(
                        egui::RichText::new(format!("Holding {}", district.title))
                            .strong()
                            .color(theme::ACCENT),
                    );
                    ui.weak(format!(
                        "({:.0}, {:.0}) from ({:.0}, {:.0})",
                        district.position.x, district.position.z, held.origin.x, held.origin.z
                    ));
                    ui.horizontal(|ui| {
                        if ui.button("Place").clicked() {
                            build_requests.send(BuildRequest::Place);
                        }
                        if ui.button("Cancel").clicked() {
                            build_requests.send(BuildRequest::Cancel);
                        }
                    });
                }
                None => {
                    ui.label("Press a district to pick it up.");
                }
            }

            ui.separator();
            let dirty = dirty_districts(&districts);
            if dirty.is_empty() {
                ui.weak("No districts moved.");
            } else {
                ui.label(format!("Moved ({}):", dirty.len()));
                for (_, title) in &dirty {
                    ui.colored_label(theme::DIRTY, *title);
                }
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Export Layout").clicked() {
                    scene_requests.send(SceneRequest::ExportLayout);
                }
                if ui.button("Exit").clicked() {
                    scene_requests.send(SceneRequest::ToggleCalibration);
                }
            });
        });
}
