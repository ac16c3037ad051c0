//! Egui input guard: keeps clicks and keys aimed at a panel out of the world.
//!
//! Captured once per frame into [`UiFocus`] at the start of the input phase,
//! so the router and picking systems read a plain resource instead of each
//! borrowing the egui context.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiFocus {
    pub wants_pointer: bool,
    pub wants_keyboard: bool,
}

/// `true` when egui wants the pointer: the cursor is over a panel or egui is
/// mid-drag.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
}

#[inline]
pub fn egui_wants_keyboard(contexts: &mut EguiContexts) -> bool {
    contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_keyboard_input())
}

pub fn capture_ui_focus(mut contexts: EguiContexts, mut focus: ResMut<UiFocus>) {
    let next = UiFocus {
        wants_pointer: egui_wants_pointer(&mut contexts),
        wants_keyboard: egui_wants_keyboard(&mut contexts),
    };
    if *focus != next {
        *focus = next;
    }
}
