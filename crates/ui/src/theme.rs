use bevy_egui::{egui, EguiContexts};

/// Accent used for headings and the active point-of-view button.
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(90, 210, 255);
pub const NOTICE: egui::Color32 = egui::Color32::from_rgb(120, 220, 150);
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(230, 70, 70);
pub const DIRTY: egui::Color32 = egui::Color32::from_rgb(255, 140, 60);

pub fn apply_neon_theme(mut contexts: EguiContexts) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let mut style = (*ctx.style()).clone();

    // Night-city panels with a cyan accent
    let panel = egui::Color32::from_rgba_premultiplied(14, 16, 28, 235);
    let inactive = egui::Color32::from_rgb(30, 34, 54);
    let hover = egui::Color32::from_rgb(45, 60, 95);
    let active = egui::Color32::from_rgb(40, 140, 200);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(8, 10, 18);
    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);
    style.visuals.window_stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(40, 90, 130));

    let rounding = egui::CornerRadius::same(4);
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.noninteractive.corner_radius = rounding;
    style.visuals.widgets.inactive.corner_radius = rounding;
    style.visuals.widgets.hovered.corner_radius = rounding;
    style.visuals.widgets.active.corner_radius = rounding;

    ctx.set_style(style);
}
