//! Scene requests: the one write path into [`SceneState`] for input, UI,
//! dialogue engines and the minigame.

use bevy::prelude::*;

use crate::app_state::{CalibrationChange, GameLaunched, PointOfView, SceneState};
use crate::build_mode::BuildMode;
use crate::camera_target::UserOrbit;
use crate::district::DistrictRegistry;
use crate::layout_export::{export_layout, ExportError, LayoutExportView};
use crate::scene_rng::SceneRng;
use crate::ships::{eligible_ship_ids, Ship};
use crate::status::StatusMessage;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum SceneRequest {
    SelectDistrict(String),
    GoHome,
    SetPointOfView(PointOfView),
    ToggleCalibration,
    ExportLayout,
    EnterGame,
    ExitGame,
}

/// Apply queued requests in arrival order.
#[allow(clippy::too_many_arguments)]
pub fn apply_scene_requests(
    mut requests: EventReader<SceneRequest>,
    mut state: ResMut<SceneState>,
    mut build: ResMut<BuildMode>,
    mut districts: ResMut<DistrictRegistry>,
    mut rng: ResMut<SceneRng>,
    mut status: ResMut<StatusMessage>,
    mut export_view: ResMut<LayoutExportView>,
    mut user_orbit: ResMut<UserOrbit>,
    ships: Query<&Ship>,
    mut launched: EventWriter<GameLaunched>,
) {
    if requests.is_empty() {
        return;
    }
    let seq_before = state.transition_seq;

    for request in requests.read() {
        debug!("scene request: {request:?}");
        match request {
            SceneRequest::SelectDistrict(id) => {
                state.select_district(id, &districts);
            }
            SceneRequest::GoHome => state.go_home(),
            SceneRequest::SetPointOfView(mode) => {
                let eligible = eligible_ship_ids(ships.iter());
                state.set_point_of_view(*mode, &eligible, &mut rng.0);
            }
            SceneRequest::ToggleCalibration => {
                if state.toggle_calibration() == Some(CalibrationChange::Exited) {
                    if let Some(id) = build.cancel(&mut districts) {
                        info!("left build mode while holding '{id}', restored");
                    }
                }
            }
            SceneRequest::ExportLayout => {
                run_export(&mut state, &mut build, &districts, &mut status, &mut export_view);
            }
            SceneRequest::EnterGame => {
                if let Some(launch) = state.enter_game(&districts) {
                    info!("minigame launched from '{}'", launch.district);
                    launched.send(launch);
                }
            }
            SceneRequest::ExitGame => {
                if state.game_active {
                    state.exit_game();
                }
            }
        }
    }

    if state.transition_seq != seq_before {
        user_orbit.reset();
    }
}

fn run_export(
    state: &mut SceneState,
    build: &mut BuildMode,
    districts: &DistrictRegistry,
    status: &mut StatusMessage,
    export_view: &mut LayoutExportView,
) {
    let export = export_layout(districts);
    let json = export.and_then(|e| Ok((e.to_pretty_json()?, e.dirty_count())));
    match json {
        Ok((json, dirty_count)) => {
            if state.calibration_active {
                // The held district is already at its dragged cell; keep it there.
                build.place();
                state.toggle_calibration();
            }
            export_view.json = Some(json);
            export_view.dirty_count = dirty_count;
            state.open_export_view();
            info!("exported layout with {dirty_count} moved districts");
        }
        Err(ExportError::NothingDirty) => {
            status.set(ExportError::NothingDirty.to_string(), false);
        }
        Err(err) => {
            error!("{err}");
            status.set(err.to_string(), true);
        }
    }
}
