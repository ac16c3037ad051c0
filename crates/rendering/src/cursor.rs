use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

use scene::build_mode::{BuildMode, CursorStyle};

fn system_icon(style: CursorStyle) -> SystemCursorIcon {
    match style {
        CursorStyle::Default => SystemCursorIcon::Default,
        CursorStyle::Grabbing => SystemCursorIcon::Grabbing,
    }
}

/// Show a grabbing cursor while a district is held.
pub fn apply_cursor_style(
    mut commands: Commands,
    build: Res<BuildMode>,
    windows: Query<Entity, With<PrimaryWindow>>,
    mut last: Local<Option<CursorStyle>>,
) {
    let style = build.cursor();
    if *last == Some(style) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    commands
        .entity(window)
        .insert(CursorIcon::System(system_icon(style)));
    *last = Some(style);
}
