//! Interaction state machine for the metropolis.
//!
//! [`SceneState`] is a composite of orthogonal axes (point of view,
//! calibration, overlay, selection, animation, idle, game) rather than a
//! single enum. Every transition is a total function: it always succeeds,
//! possibly as a no-op, and the return value says whether anything changed.
//!
//! Accepted transitions bump `transition_seq` and raise `animation_in_flight`.
//! Only [`SceneState::on_camera_converged`] lowers the flag again, and the
//! overlay for a selected district is chosen there, after the camera arrives.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GAME_SPAWN_HEIGHT;
use crate::district::DistrictRegistry;
use crate::overlay::{OverlayDispatch, OverlayKind};
use crate::ships::ShipId;

/// Which camera behaviour is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointOfView {
    #[default]
    Overview,
    DistrictFocus,
    ShipFollow,
}

impl PointOfView {
    pub fn label(self) -> &'static str {
        match self {
            PointOfView::Overview => "Overview",
            PointOfView::DistrictFocus => "District",
            PointOfView::ShipFollow => "Ship Cam",
        }
    }
}

/// Result of [`SceneState::toggle_calibration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationChange {
    Entered,
    Exited,
}

/// Spawn signal handed to the minigame when it starts.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct GameLaunched {
    pub district: String,
    pub spawn: Vec3,
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SceneState {
    pub point_of_view: PointOfView,
    pub followed_ship: Option<ShipId>,
    pub calibration_active: bool,
    pub active_overlay: OverlayKind,
    pub animation_in_flight: bool,
    pub selected_district: Option<String>,
    /// Auto-rotate in overview after a period without input.
    pub idle: bool,
    /// The minigame is running and owns the camera.
    pub game_active: bool,
    /// Incremented on every accepted transition.
    pub transition_seq: u64,
}

impl SceneState {
    fn begin_transition(&mut self) {
        self.transition_seq = self.transition_seq.wrapping_add(1);
        self.animation_in_flight = true;
        self.idle = false;
    }

    /// Travel to a major district. The overlay opens on convergence.
    pub fn select_district(&mut self, id: &str, districts: &DistrictRegistry) -> bool {
        if !self.accepts_selection() {
            debug!("select_district: '{id}' ignored while calibrating or in a game");
            return false;
        }
        if !districts.is_selectable(id) {
            #[cfg(debug_assertions)]
            warn!("select_district: '{id}' is not a selectable district, ignoring");
            return false;
        }
        if self.selected_district.as_deref() == Some(id) && !self.animation_in_flight {
            return false;
        }
        self.active_overlay = OverlayKind::None;
        self.followed_ship = None;
        self.point_of_view = PointOfView::DistrictFocus;
        self.selected_district = Some(id.to_string());
        self.begin_transition();
        true
    }

    /// Return to the overview with nothing selected.
    pub fn go_home(&mut self) {
        self.selected_district = None;
        self.active_overlay = OverlayKind::None;
        self.followed_ship = None;
        self.game_active = false;
        self.point_of_view = PointOfView::Overview;
        self.begin_transition();
    }

    /// Switch camera behaviour. Ship-follow picks a random eligible ship and
    /// silently falls back to the overview when there is none.
    pub fn set_point_of_view<R: Rng + ?Sized>(
        &mut self,
        mode: PointOfView,
        eligible_ships: &[ShipId],
        rng: &mut R,
    ) -> bool {
        if mode == self.point_of_view || self.calibration_active || self.game_active {
            return false;
        }
        match mode {
            PointOfView::Overview => self.go_home(),
            PointOfView::ShipFollow => match eligible_ships.choose(rng) {
                Some(&ship) => {
                    self.selected_district = None;
                    self.active_overlay = OverlayKind::None;
                    self.followed_ship = Some(ship);
                    self.point_of_view = PointOfView::ShipFollow;
                    self.begin_transition();
                }
                None => {
                    #[cfg(debug_assertions)]
                    warn!("set_point_of_view: no eligible ships, staying in overview");
                    self.go_home();
                }
            },
            PointOfView::DistrictFocus => {
                if self.point_of_view == PointOfView::ShipFollow || self.selected_district.is_none() {
                    self.go_home();
                } else {
                    self.point_of_view = PointOfView::DistrictFocus;
                    self.begin_transition();
                }
            }
        }
        true
    }

    /// Called by the camera rig when it has reached the current target.
    pub fn on_camera_converged(&mut self, dispatch: &OverlayDispatch, districts: &DistrictRegistry) {
        self.animation_in_flight = false;
        if self.active_overlay != OverlayKind::None || self.game_active {
            return;
        }
        let Some(id) = self.selected_district.as_deref() else {
            return;
        };
        match districts.get(id) {
            Some(district) => self.active_overlay = dispatch.resolve(district),
            None => {
                #[cfg(debug_assertions)]
                warn!("on_camera_converged: selected district '{id}' vanished");
            }
        }
    }

    /// Enter or leave build mode. Entering always returns home first.
    /// The caller hands any held district to the build-mode controller on exit.
    /// Returns `None` while a game is running.
    pub fn toggle_calibration(&mut self) -> Option<CalibrationChange> {
        if self.game_active {
            return None;
        }
        if self.calibration_active {
            self.calibration_active = false;
            self.begin_transition();
            Some(CalibrationChange::Exited)
        } else {
            self.go_home();
            self.calibration_active = true;
            Some(CalibrationChange::Entered)
        }
    }

    /// Start the minigame from the lobby of the selected district.
    pub fn enter_game(&mut self, districts: &DistrictRegistry) -> Option<GameLaunched> {
        if self.active_overlay != OverlayKind::GameLobby {
            return None;
        }
        let id = self.selected_district.clone()?;
        let district = districts.get(&id)?;
        let spawn = district.position + Vec3::Y * GAME_SPAWN_HEIGHT;
        self.active_overlay = OverlayKind::None;
        self.selected_district = None;
        self.followed_ship = None;
        self.point_of_view = PointOfView::Overview;
        self.game_active = true;
        self.idle = false;
        self.transition_seq = self.transition_seq.wrapping_add(1);
        Some(GameLaunched {
            district: id,
            spawn,
        })
    }

    pub fn exit_game(&mut self) {
        self.go_home();
    }

    /// Show the layout export. Not available while calibrating.
    pub fn open_export_view(&mut self) -> bool {
        if self.calibration_active || self.game_active {
            return false;
        }
        self.active_overlay = OverlayKind::ExportView;
        true
    }

    /// Idle auto-rotate only applies to a resting overview.
    pub fn set_idle(&mut self, idle: bool) {
        self.idle = idle
            && self.point_of_view == PointOfView::Overview
            && self.active_overlay == OverlayKind::None
            && !self.calibration_active
            && !self.game_active
            && !self.animation_in_flight;
    }

    /// Whether clicking a district should select it.
    pub fn accepts_selection(&self) -> bool {
        !self.calibration_active && !self.game_active
    }
}
