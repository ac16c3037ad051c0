use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use scene::app_state::SceneState;
use scene::camera_rig::CameraConverged;
use scene::requests::SceneRequest;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Digital Metropolis".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        scene::ScenePlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // Screenshot mode: flies to each stop, captures it on arrival and exits
    if std::env::var("METROPOLIS_SCREENSHOTS").is_ok() {
        app.insert_resource(ScreenshotTour {
            frame: 0,
            current: 0,
            settle: None,
            stops: vec![
                TourStop::Home,
                TourStop::District("skills-matrix"),
                TourStop::District("project-forge"),
                TourStop::District("oracle-spire"),
                TourStop::District("arcade-hangar"),
                TourStop::Home,
            ],
        });
        app.add_systems(Update, drive_screenshots.after(scene::SceneSet::Converged));
    }

    app.run();
}

enum TourStop {
    Home,
    District(&'static str),
}

impl TourStop {
    fn request(&self) -> SceneRequest {
        match self {
            TourStop::Home => SceneRequest::GoHome,
            TourStop::District(id) => SceneRequest::SelectDistrict(id.to_string()),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TourStop::Home => "overview",
            TourStop::District(id) => id,
        }
    }
}

#[derive(Resource)]
struct ScreenshotTour {
    frame: u32,
    current: usize,
    /// Frames left before capturing the current stop.
    settle: Option<u32>,
    stops: Vec<TourStop>,
}

/// Frames to wait after arrival so the overlay has been drawn.
const SETTLE_FRAMES: u32 = 6;
/// Give up on a stop whose flight never converges.
const STOP_TIMEOUT_FRAMES: u32 = 600;

fn drive_screenshots(
    mut commands: Commands,
    mut tour: ResMut<ScreenshotTour>,
    state: Res<SceneState>,
    mut converged: EventReader<CameraConverged>,
    mut requests: EventWriter<SceneRequest>,
    mut exit: EventWriter<AppExit>,
    mut stop_started: Local<u32>,
) {
    tour.frame += 1;

    // Wait for the first frames to render
    if tour.frame < 120 {
        converged.clear();
        return;
    }

    let idx = tour.current;
    if idx >= tour.stops.len() {
        exit.send(AppExit::Success);
        return;
    }

    if *stop_started == 0 {
        requests.send(tour.stops[idx].request());
        *stop_started = tour.frame;
        converged.clear();
        return;
    }

    let arrived = !converged.is_empty() || !state.animation_in_flight;
    converged.clear();

    let settle = tour.settle;
    match settle {
        None if arrived || tour.frame - *stop_started > STOP_TIMEOUT_FRAMES => {
            tour.settle = Some(SETTLE_FRAMES);
        }
        None => {}
        Some(0) => {
            let path = format!("/tmp/metropolis_{:02}_{}.png", idx, tour.stops[idx].name());
            info!("Screenshot tour: saving {path}");
            commands
                .spawn(Screenshot::primary_window())
                .observe(save_to_disk(path));
            tour.current += 1;
            tour.settle = None;
            *stop_started = 0;
        }
        Some(n) => tour.settle = Some(n - 1),
    }
}
