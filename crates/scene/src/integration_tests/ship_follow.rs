use crate::app_state::PointOfView;
use crate::config::OVERVIEW_POSITION;
use crate::overlay::OverlayKind;
use crate::requests::SceneRequest;
use crate::ships::ShipId;
use crate::test_harness::TestScene;

const MAX_FRAMES: u32 = 1200;

fn follow() -> SceneRequest {
    SceneRequest::SetPointOfView(PointOfView::ShipFollow)
}

#[test]
fn test_ship_follow_without_ships_stays_in_overview() {
    let mut scene = TestScene::new().without_ships();
    assert_eq!(scene.ship_count(), 0);

    scene.request(follow());
    assert!(scene.tick_until_converged(MAX_FRAMES).is_some());
    assert_eq!(scene.state().point_of_view, PointOfView::Overview);
    assert_eq!(scene.state().followed_ship, None);
    assert_eq!(scene.state().active_overlay, OverlayKind::None);
    assert!(scene.camera().translation.distance(OVERVIEW_POSITION) < 0.5);
}

#[test]
fn test_ship_follow_picks_eligible_ship_and_converges() {
    let mut scene = TestScene::new();
    scene.request(follow());
    scene.tick(1);
    assert_eq!(scene.state().point_of_view, PointOfView::ShipFollow);
    // Ship 2 is not eligible in the authored fleet.
    assert!(matches!(scene.state().followed_ship, Some(ShipId(0)) | Some(ShipId(1))));
    assert!(scene.tick_until_converged(MAX_FRAMES).is_some());
}

#[test]
fn test_same_seed_follows_same_ship() {
    let mut a = TestScene::with_seed(11);
    let mut b = TestScene::with_seed(11);
    a.request(follow()).tick(1);
    b.request(follow()).tick(1);
    assert_eq!(a.state().followed_ship, b.state().followed_ship);
}

#[test]
fn test_removed_ship_falls_back_to_overview_target() {
    let mut scene = TestScene::new();
    scene.request(follow());
    scene.tick_until_converged(MAX_FRAMES);
    let followed = scene.state().followed_ship.expect("following a ship");

    assert!(scene.despawn_ship(followed));
    scene.tick(600);
    assert!(scene.camera().translation.distance(OVERVIEW_POSITION) < 1.0);
}

#[test]
fn test_leaving_ship_follow_goes_home() {
    let mut scene = TestScene::new();
    scene.request(follow()).tick(1);
    scene
        .request(SceneRequest::SetPointOfView(PointOfView::Overview))
        .tick(1);
    assert_eq!(scene.state().point_of_view, PointOfView::Overview);
    assert_eq!(scene.state().followed_ship, None);
}
