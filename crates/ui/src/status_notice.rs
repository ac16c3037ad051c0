use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use scene::status::StatusMessage;

use crate::theme;

pub fn notice_color(is_error: bool) -> egui::Color32 {
    if is_error {
        theme::ERROR
    } else {
        theme::NOTICE
    }
}

/// Floating toast for the current status message.
pub fn status_notice_ui(mut contexts: EguiContexts, status: Res<StatusMessage>) {
    if !status.active() {
        return;
    }
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let x = ctx.screen_rect().center().x - 100.0;
    egui::Area::new(egui::Id::new("status_toast"))
        .fixed_pos(egui::pos2(x, 44.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(egui::Color32::from_rgba_premultiplied(14, 16, 28, 220))
                .show(ui, |ui| {
                    ui.colored_label(notice_color(status.is_error), status.text.as_str());
                });
        });
}
