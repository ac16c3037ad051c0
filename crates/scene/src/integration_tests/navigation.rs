use crate::app_state::PointOfView;
use crate::config::{DISTRICT_ORBIT_DISTANCE, OVERVIEW_POSITION};
use crate::overlay::OverlayKind;
use crate::requests::SceneRequest;
use crate::test_harness::TestScene;

const MAX_FRAMES: u32 = 1200;

fn select(id: &str) -> SceneRequest {
    SceneRequest::SelectDistrict(id.into())
}

#[test]
fn test_scene_set_phases_configured() {
    // A broken set chain panics on the first update.
    let mut scene = TestScene::new();
    scene.tick(5);
    assert_eq!(scene.state().point_of_view, PointOfView::Overview);
    assert_eq!(scene.ship_count(), 3);
}

#[test]
fn test_select_skills_matrix_opens_project_panel_on_arrival() {
    let mut scene = TestScene::new();
    scene.request(select("skills-matrix")).tick(1);

    assert!(scene.state().animation_in_flight);
    assert_eq!(scene.state().active_overlay, OverlayKind::None);

    let frames = scene.tick_until_converged(MAX_FRAMES);
    assert!(frames.is_some(), "camera never converged");
    assert_eq!(scene.state().active_overlay, OverlayKind::ProjectPanel);
    assert_eq!(scene.state().selected_district.as_deref(), Some("skills-matrix"));

    let center = scene.district_position("skills-matrix").unwrap_or_default();
    let camera = scene.camera();
    let distance = camera.translation.distance(center);
    assert!(
        (distance - DISTRICT_ORBIT_DISTANCE).abs() < 1.0,
        "camera {distance} from district"
    );
}

#[test]
fn test_request_moves_camera_in_same_frame() {
    let mut scene = TestScene::new();
    let before = scene.camera().translation;
    scene.request(select("oracle-spire")).tick(1);
    assert_ne!(scene.camera().translation, before);
}

#[test]
fn test_reselecting_converged_district_is_noop() {
    let mut scene = TestScene::new();
    scene.request(select("oracle-spire"));
    scene.tick_until_converged(MAX_FRAMES);
    let seq = scene.state().transition_seq;

    scene.request(select("oracle-spire")).tick(3);
    assert_eq!(scene.state().transition_seq, seq);
    assert_eq!(scene.state().active_overlay, OverlayKind::OracleChat);
    assert!(!scene.state().animation_in_flight);
}

#[test]
fn test_retarget_mid_flight_opens_only_final_overlay() {
    let mut scene = TestScene::new();
    scene.request(select("oracle-spire")).tick(10);
    assert!(scene.state().animation_in_flight);

    scene.request(select("contact-beacon"));
    scene.tick_until_converged(MAX_FRAMES);
    assert_eq!(scene.state().active_overlay, OverlayKind::ContactHub);
    assert_eq!(scene.state().selected_district.as_deref(), Some("contact-beacon"));
}

#[test]
fn test_minor_district_ignored() {
    let mut scene = TestScene::new();
    let seq = scene.state().transition_seq;
    scene.request(select("neon-market")).tick(2);
    assert_eq!(scene.state().transition_seq, seq);
    assert_eq!(scene.state().selected_district, None);
}

#[test]
fn test_plain_district_opens_info() {
    let mut scene = TestScene::new();
    scene.request(select("about-atrium"));
    scene.tick_until_converged(MAX_FRAMES);
    assert_eq!(scene.state().active_overlay, OverlayKind::DistrictInfo);
}

#[test]
fn test_go_home_returns_to_overview() {
    let mut scene = TestScene::new();
    scene.request(select("project-forge"));
    scene.tick_until_converged(MAX_FRAMES);
    assert_eq!(scene.state().active_overlay, OverlayKind::ProjectPanel);

    scene.request(SceneRequest::GoHome);
    assert!(scene.tick_until_converged(MAX_FRAMES).is_some());
    assert_eq!(scene.state().active_overlay, OverlayKind::None);
    assert_eq!(scene.state().selected_district, None);
    assert!(scene.camera().translation.distance(OVERVIEW_POSITION) < 0.5);
}

#[test]
fn test_idle_auto_rotate_and_wake() {
    let mut scene = TestScene::new();
    // IDLE_SECONDS at 60 fps, plus slack.
    scene.tick(1260);
    assert!(scene.state().idle);
    scene.tick(120);
    let rotated = scene.camera().translation;
    assert!(rotated.distance(OVERVIEW_POSITION) > 0.1, "overview did not rotate");
    assert!((rotated.y - OVERVIEW_POSITION.y).abs() < 1.0);

    scene.activity().tick(1);
    assert!(!scene.state().idle);
}
