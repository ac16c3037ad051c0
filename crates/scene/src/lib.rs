use bevy::prelude::*;

pub mod app_state;
pub mod build_mode;
pub mod camera_rig;
pub mod camera_target;
pub mod catalog;
pub mod config;
pub mod district;
pub mod grid;
pub mod idle;
pub mod input_router;
pub mod keybindings;
pub mod layout_export;
pub mod overlay;
pub mod pointer;
pub mod requests;
pub mod scene_rng;
pub mod scene_sets;
pub mod ships;
pub mod status;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use scene_sets::SceneSet;

use app_state::{GameLaunched, SceneState};
use build_mode::{apply_build_requests, drag_held_district, BuildMode, BuildRequest};
use camera_rig::{
    drive_camera_rig, handle_camera_converged, CameraConverged, CameraRig, OrbitControls,
    RigConfig,
};
use camera_target::UserOrbit;
use district::DistrictRegistry;
use grid::GridSpec;
use idle::{track_idle, IdleTracker, UserActivity};
use keybindings::KeyBindings;
use layout_export::LayoutExportView;
use overlay::OverlayDispatch;
use pointer::PointerState;
use requests::{apply_scene_requests, SceneRequest};
use scene_rng::SceneRng;
use ships::{advance_ships, spawn_ships};
use status::{tick_status_message, StatusMessage};

/// Core scene logic: state machine, camera rig, build mode and their wiring.
/// Needs only `MinimalPlugins`; everything window- or GPU-related lives in the
/// rendering and ui crates.
///
/// Tuning resources (`RigConfig`, `GridSpec`, `KeyBindings`, `DistrictRegistry`,
/// `SceneRng`) use `init_resource`, so an app can insert its own beforehand.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneState>()
            .init_resource::<DistrictRegistry>()
            .init_resource::<GridSpec>()
            .init_resource::<BuildMode>()
            .init_resource::<PointerState>()
            .init_resource::<RigConfig>()
            .init_resource::<CameraRig>()
            .init_resource::<OrbitControls>()
            .init_resource::<UserOrbit>()
            .init_resource::<KeyBindings>()
            .init_resource::<IdleTracker>()
            .init_resource::<SceneRng>()
            .init_resource::<StatusMessage>()
            .init_resource::<LayoutExportView>()
            .add_event::<SceneRequest>()
            .add_event::<BuildRequest>()
            .add_event::<UserActivity>()
            .add_event::<CameraConverged>()
            .add_event::<GameLaunched>();

        if !app.world().contains_resource::<OverlayDispatch>() {
            app.insert_resource(OverlayDispatch::authored());
        }

        app.configure_sets(
            Update,
            (
                SceneSet::Input,
                SceneSet::Transitions,
                SceneSet::Camera,
                SceneSet::Converged,
                SceneSet::Visual,
            )
                .chain(),
        );

        app.add_systems(Startup, spawn_ships)
            .add_systems(
                Update,
                (
                    apply_scene_requests,
                    apply_build_requests,
                    drag_held_district,
                    track_idle,
                    advance_ships,
                )
                    .chain()
                    .in_set(SceneSet::Transitions),
            )
            .add_systems(Update, drive_camera_rig.in_set(SceneSet::Camera))
            .add_systems(Update, handle_camera_converged.in_set(SceneSet::Converged))
            .add_systems(Update, tick_status_message.in_set(SceneSet::Visual));
    }
}
