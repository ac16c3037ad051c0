//! The overlay shown after the camera arrives at a district, plus the
//! standalone arcade lobby and layout export views.
//!
//! Panels never change scene state directly. Every button sends a
//! [`SceneRequest`], so the same rules apply as for keyboard and pointer input.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use scene::app_state::SceneState;
use scene::district::{District, DistrictRegistry, DistrictTag};
use scene::layout_export::LayoutExportView;
use scene::overlay::OverlayKind;
use scene::requests::SceneRequest;

use crate::theme;

const PANEL_WIDTH: f32 = 320.0;

/// Contact channels listed in the contact hub.
pub const CONTACT_LINKS: &[(&str, &str)] = &[
    ("Email", "mailto:hello@metropolis.dev"),
    ("GitHub", "https://github.com/"),
    ("LinkedIn", "https://www.linkedin.com/"),
];

/// Districts the Oracle can take the visitor to: every major district
/// except the Oracle's own.
pub fn oracle_destinations(districts: &DistrictRegistry) -> Vec<(&str, &str)> {
    districts
        .iter()
        .filter(|d| d.is_major() && d.tag != DistrictTag::Ai)
        .map(|d| (d.id.as_str(), d.title.as_str()))
        .collect()
}

/// Window title for an overlay, preferring the selected district's name.
pub fn overlay_title(kind: OverlayKind, district: Option<&District>) -> String {
    match (kind.is_district_bound(), district) {
        (true, Some(d)) => d.title.clone(),
        _ => kind.label().to_string(),
    }
}

fn project_panel(ui: &mut egui::Ui, district: &District) {
    ui.label(district.summary.as_str());
    ui.separator();
    egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
        for item in &district.items {
            ui.label(egui::RichText::new(&item.title).strong().color(theme::ACCENT));
            ui.label(item.description.as_str());
            if let Some(image) = &item.image {
                ui.weak(image.as_str());
            }
            ui.add_space(6.0);
        }
    });
}

fn oracle_chat(
    ui: &mut egui::Ui,
    district: &District,
    districts: &DistrictRegistry,
    requests: &mut EventWriter<SceneRequest>,
) {
    ui.label(district.summary.as_str());
    ui.separator();
    ui.label("Where would you like to go?");
    for (id, title) in oracle_destinations(districts) {
        if ui.button(format!("Take me to {title}")).clicked() {
            requests.send(SceneRequest::SelectDistrict(id.to_string()));
        }
    }
}

fn contact_hub(ui: &mut egui::Ui, district: &District) {
    ui.label(district.summary.as_str());
    ui.separator();
    for (name, url) in CONTACT_LINKS {
        ui.hyperlink_to(*name, *url);
    }
}

fn game_lobby(ui: &mut egui::Ui, district: Option<&District>, requests: &mut EventWriter<SceneRequest>) {
    if let Some(d) = district {
        ui.label(d.summary.as_str());
    }
    ui.separator();
    if ui
        .button(egui::RichText::new("Launch").strong().color(theme::ACCENT))
        .clicked()
    {
        requests.send(SceneRequest::EnterGame);
    }
}

fn export_view(ui: &mut egui::Ui, view: &LayoutExportView) {
    let Some(json) = view.json.as_deref() else {
        ui.weak("No export yet.");
        return;
    };
    ui.label(format!("{} district(s) moved", view.dirty_count));
    if ui.button("Copy to clipboard").clicked() {
        ui.ctx().copy_text(json.to_string());
    }
    ui.separator();
    let mut text = json;
    egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
        ui.add(
            egui::TextEdit::multiline(&mut text)
                .code_editor()
                .desired_width(f32::INFINITY),
        );
    });
}

pub fn overlay_panel_ui(
    mut contexts: EguiContexts,
    state: Res<SceneState>,
    districts: Res<DistrictRegistry>,
    export: Res<LayoutExportView>,
    mut requests: EventWriter<SceneRequest>,
) {
    let kind = state.active_overlay;
    if kind == OverlayKind::None || state.game_active {
        return;
    }
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let district = state
        .selected_district
        .as_deref()
        .and_then(|id| districts.get(id));

    egui::Window::new(overlay_title(kind, district))
        .id(egui::Id::new("overlay_panel"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-8.0, 44.0))
        .default_width(PANEL_WIDTH)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            match (kind, district) {
                (OverlayKind::ProjectPanel, Some(d)) => project_panel(ui, d),
                (OverlayKind::DistrictInfo, Some(d)) => {
                    ui.label(d.summary.as_str());
                }
                (OverlayKind::OracleChat, Some(d)) => oracle_chat(ui, d, &districts, &mut requests),
                (OverlayKind::ContactHub, Some(d)) => contact_hub(ui, d),
                (OverlayKind::GameLobby, d) => game_lobby(ui, d, &mut requests),
                (OverlayKind::ExportView, _) => export_view(ui, &export),
                _ => {
                    ui.weak("Nothing to show.");
                }
            }
            ui.separator();
            if ui.button("Back to city").clicked() {
                requests.send(SceneRequest::GoHome);
            }
        });
}
