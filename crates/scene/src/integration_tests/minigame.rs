use bevy::prelude::*;

use crate::config::GAME_SPAWN_HEIGHT;
use crate::overlay::OverlayKind;
use crate::requests::SceneRequest;
use crate::test_harness::TestScene;

const MAX_FRAMES: u32 = 1200;

fn at_lobby() -> TestScene {
    let mut scene = TestScene::new();
    scene.request(SceneRequest::SelectDistrict("arcade-hangar".into()));
    scene.tick_until_converged(MAX_FRAMES);
    scene
}

#[test]
fn test_enter_game_from_lobby_sends_spawn() {
    let mut scene = at_lobby();
    assert_eq!(scene.state().active_overlay, OverlayKind::GameLobby);

    scene.request(SceneRequest::EnterGame).tick(1);
    assert!(scene.state().game_active);
    assert_eq!(scene.state().active_overlay, OverlayKind::None);

    let hangar = scene.district_position("arcade-hangar").unwrap_or_default();
    let launches = scene.launches();
    assert_eq!(launches.len(), 1);
    assert_eq!(launches[0].district, "arcade-hangar");
    assert_eq!(launches[0].spawn, hangar + Vec3::Y * GAME_SPAWN_HEIGHT);
}

#[test]
fn test_rig_leaves_camera_alone_during_game() {
    let mut scene = at_lobby();
    scene.request(SceneRequest::EnterGame).tick(1);
    let parked = scene.camera();
    scene.tick(30);
    assert_eq!(scene.camera(), parked);
}

#[test]
fn test_exit_game_returns_home() {
    let mut scene = at_lobby();
    scene.request(SceneRequest::EnterGame).tick(1);
    scene.request(SceneRequest::ExitGame);
    assert!(scene.tick_until_converged(MAX_FRAMES).is_some());
    assert!(!scene.state().game_active);
    assert_eq!(scene.state().selected_district, None);
}

#[test]
fn test_game_keeps_camera_against_select_and_build_requests() {
    let mut scene = at_lobby();
    scene.request(SceneRequest::EnterGame).tick(1);
    let parked = scene.camera();

    scene
        .request(SceneRequest::SelectDistrict("skills-matrix".into()))
        .request(SceneRequest::ToggleCalibration)
        .tick(30);
    assert!(scene.state().game_active);
    assert!(!scene.state().calibration_active);
    assert_eq!(scene.state().selected_district, None);
    assert_eq!(scene.camera(), parked);
}

#[test]
fn test_enter_game_without_lobby_ignored() {
    let mut scene = TestScene::new();
    scene.request(SceneRequest::EnterGame).tick(1);
    assert!(!scene.state().game_active);
    assert!(scene.launches().is_empty());
}
