use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use scene::app_state::{PointOfView, SceneState};
use scene::input_router::KeyAction;
use scene::keybindings::KeyBindings;
use scene::requests::SceneRequest;

use crate::theme;

/// One top-bar button: label, the request it sends, and whether it is lit.
#[derive(Debug, Clone, PartialEq)]
pub struct HudButton {
    pub label: &'static str,
    pub request: SceneRequest,
    pub highlighted: bool,
}

/// Buttons offered for the current mode. A running game only offers its exit.
pub fn hud_buttons(state: &SceneState) -> Vec<HudButton> {
    if state.game_active {
        return vec![HudButton {
            label: "Exit Game",
            request: SceneRequest::ExitGame,
            highlighted: true,
        }];
    }
    if state.calibration_active {
        return vec![
            HudButton {
                label: "Export",
                request: SceneRequest::ExportLayout,
                highlighted: false,
            },
            HudButton {
                label: "Build Mode",
                request: SceneRequest::ToggleCalibration,
                highlighted: true,
            },
        ];
    }

    let following = state.point_of_view == PointOfView::ShipFollow;
    vec![
        HudButton {
            label: "Home",
            request: SceneRequest::GoHome,
            highlighted: state.point_of_view == PointOfView::Overview,
        },
        HudButton {
            label: "Ship Cam",
            request: SceneRequest::SetPointOfView(if following {
                PointOfView::Overview
            } else {
                PointOfView::ShipFollow
            }),
            highlighted: following,
        },
        HudButton {
            label: "Build Mode",
            request: SceneRequest::ToggleCalibration,
            highlighted: false,
        },
        HudButton {
            label: "Export",
            request: SceneRequest::ExportLayout,
            highlighted: false,
        },
    ]
}

/// "[H] Home  [B] Build ..." hint line built from the live bindings.
pub fn key_hints(bindings: &KeyBindings) -> String {
    KeyAction::ALL
        .iter()
        .map(|&action| format!("[{}] {}", bindings.get(action).display_label(), action.label()))
        .collect::<Vec<_>>()
        .join("  ")
}

fn mode_label(state: &SceneState) -> &'static str {
    if state.game_active {
        "Arcade"
    } else if state.calibration_active {
        "Build Mode"
    } else {
        state.point_of_view.label()
    }
}

pub fn hud_ui(
    mut contexts: EguiContexts,
    state: Res<SceneState>,
    bindings: Res<KeyBindings>,
    mut requests: EventWriter<SceneRequest>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    egui::TopBottomPanel::top("hud_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;
                ui.label(
                    egui::RichText::new("DIGITAL METROPOLIS")
                        .strong()
                        .color(theme::ACCENT),
                );
                ui.separator();
                ui.label(mode_label(&state));
                if state.animation_in_flight {
                    ui.weak("(travelling)");
                }
                ui.separator();

                for button in hud_buttons(&state) {
                    let text = if button.highlighted {
                        egui::RichText::new(button.label).strong().color(theme::ACCENT)
                    } else {
                        egui::RichText::new(button.label)
                    };
                    if ui.button(text).clicked() {
                        requests.send(button.request);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(key_hints(&bindings));
                });
            });
        });
}
