use bevy::prelude::*;

use crate::app_state::SceneState;
use crate::build_mode::{BuildRequest, CursorStyle};
use crate::config::CALIBRATION_POSITION;
use crate::overlay::OverlayKind;
use crate::requests::SceneRequest;
use crate::test_harness::TestScene;

const MAX_FRAMES: u32 = 1200;

fn calibrating() -> TestScene {
    let mut scene = TestScene::new();
    scene.request(SceneRequest::ToggleCalibration);
    scene.tick_until_converged(MAX_FRAMES);
    scene
}

fn pick_up(scene: &mut TestScene, id: &str, hit: Vec3) {
    scene
        .set_ground_hit(Some(hit))
        .build(BuildRequest::PickUp(id.into()))
        .tick(1);
}

#[test]
fn test_calibration_camera_position() {
    let mut scene = calibrating();
    assert!(scene.state().calibration_active);
    assert!(scene.camera().translation.distance(CALIBRATION_POSITION) < 0.5);
}

#[test]
fn test_drag_snaps_to_grid_and_marks_dirty() {
    let mut scene = calibrating();
    pick_up(&mut scene, "project-forge", Vec3::new(-97.0, 0.0, 104.0));
    assert_eq!(scene.build_mode().cursor(), CursorStyle::Grabbing);
    assert_eq!(
        scene.district_position("project-forge"),
        Some(Vec3::new(-100.0, 0.0, 100.0))
    );

    scene.set_ground_hit(Some(Vec3::new(12.0, 0.0, -33.0))).tick(1);
    assert_eq!(
        scene.district_position("project-forge"),
        Some(Vec3::new(10.0, 0.0, -30.0))
    );

    scene.build(BuildRequest::Place).tick(1);
    assert!(!scene.build_mode().is_holding());
    assert!(scene.districts().get("project-forge").is_some_and(|d| d.is_dirty));
}

#[test]
fn test_ray_miss_leaves_district() {
    let mut scene = calibrating();
    let before = scene.district_position("oracle-spire");
    scene.set_ground_hit(None).build(BuildRequest::PickUp("oracle-spire".into())).tick(3);
    assert!(scene.build_mode().is_holding());
    assert_eq!(scene.district_position("oracle-spire"), before);
}

#[test]
fn test_cancel_restores_pre_move_position() {
    let mut scene = calibrating();
    let origin = scene.district_position("project-forge");
    pick_up(&mut scene, "project-forge", Vec3::new(-100.0, 0.0, 100.0));
    scene.set_ground_hit(Some(Vec3::new(-80.0, 0.0, 90.0))).tick(1);

    scene.build(BuildRequest::Cancel).tick(1);
    assert_eq!(scene.district_position("project-forge"), origin);
    assert!(scene.districts().get("project-forge").is_some_and(|d| !d.is_dirty));
}

#[test]
fn test_leaving_calibration_while_holding_restores() {
    let mut scene = calibrating();
    let origin = scene.district_position("about-atrium");
    pick_up(&mut scene, "about-atrium", Vec3::new(-50.0, 0.0, -50.0));
    assert_ne!(scene.district_position("about-atrium"), origin);

    scene.request(SceneRequest::ToggleCalibration).tick(1);
    assert!(!scene.state().calibration_active);
    assert!(!scene.build_mode().is_holding());
    assert_eq!(scene.district_position("about-atrium"), origin);
}

#[test]
fn test_select_request_ignored_while_holding() {
    let mut scene = calibrating();
    pick_up(&mut scene, "about-atrium", Vec3::new(-50.0, 0.0, -50.0));

    scene
        .request(SceneRequest::SelectDistrict("oracle-spire".into()))
        .tick(1);
    assert!(scene.state().calibration_active);
    assert_eq!(scene.state().selected_district, None);
    assert_eq!(scene.build_mode().held_id(), Some("about-atrium"));

    scene.set_ground_hit(Some(Vec3::new(80.0, 0.0, 80.0))).tick(1);
    scene.build(BuildRequest::Place).tick(1);
    assert!(!scene.build_mode().is_holding());
    assert_eq!(
        scene.district_position("about-atrium"),
        Some(Vec3::new(80.0, 0.0, 80.0))
    );
}

#[test]
fn test_hold_cancelled_when_calibration_ends_elsewhere() {
    let mut scene = calibrating();
    let origin = scene.district_position("about-atrium");
    pick_up(&mut scene, "about-atrium", Vec3::new(-50.0, 0.0, -50.0));

    scene.world_mut().resource_mut::<SceneState>().calibration_active = false;
    scene.set_ground_hit(Some(Vec3::new(80.0, 0.0, 80.0))).tick(1);
    assert!(!scene.build_mode().is_holding());
    assert_eq!(scene.district_position("about-atrium"), origin);
    assert!(scene.districts().get("about-atrium").is_some_and(|d| !d.is_dirty));
}

#[test]
fn test_pick_up_outside_calibration_ignored() {
    let mut scene = TestScene::new();
    pick_up(&mut scene, "project-forge", Vec3::new(-100.0, 0.0, 100.0));
    assert!(!scene.build_mode().is_holding());
    assert!(!scene.districts().any_dirty());
}

#[test]
fn test_export_with_nothing_dirty_shows_notice() {
    let mut scene = calibrating();
    scene.request(SceneRequest::ExportLayout).tick(1);
    assert!(scene.status().active());
    assert!(scene.status().text.contains("Nothing to export"));
    assert!(scene.state().calibration_active);
    assert_eq!(scene.export_view().json, None);
}

#[test]
fn test_export_after_moves_lists_every_district() {
    let mut scene = calibrating();
    pick_up(&mut scene, "skills-matrix", Vec3::new(10.0, 0.0, 20.0));
    scene.build(BuildRequest::Place).tick(1);

    scene.request(SceneRequest::ExportLayout).tick(1);
    assert!(!scene.state().calibration_active);
    assert_eq!(scene.state().active_overlay, OverlayKind::ExportView);
    assert_eq!(scene.export_view().dirty_count, 1);

    let json = scene.export_view().json.clone().unwrap_or_default();
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let entries = value.as_array().expect("array");
    assert_eq!(entries.len(), scene.districts().len());
    let moved = entries
        .iter()
        .find(|e| e["id"] == "skills-matrix")
        .expect("moved district present");
    assert_eq!(moved["isDirty"], true);
    assert_eq!(moved["position"][0], 10.0);
    assert_eq!(moved["position"][2], 20.0);
}

#[test]
fn test_export_while_holding_places_and_leaves_calibration() {
    let mut scene = calibrating();
    pick_up(&mut scene, "oracle-spire", Vec3::new(31.0, 0.0, 29.0));
    assert!(scene.build_mode().is_holding());

    scene.request(SceneRequest::ExportLayout).tick(1);
    assert!(!scene.build_mode().is_holding());
    assert!(!scene.state().calibration_active);
    assert_eq!(scene.state().active_overlay, OverlayKind::ExportView);
    assert_eq!(
        scene.district_position("oracle-spire"),
        Some(Vec3::new(30.0, 0.0, 30.0))
    );
}
