//! # TestScene: headless integration harness for the metropolis scene
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + [`ScenePlugin`] and a
//! rig camera, advancing time by a fixed 1/60 s per frame. No window or GPU.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::app_state::{GameLaunched, SceneState};
use crate::build_mode::{BuildMode, BuildRequest};
use crate::camera_rig::RigCamera;
use crate::config::OVERVIEW_POSITION;
use crate::district::DistrictRegistry;
use crate::idle::UserActivity;
use crate::layout_export::LayoutExportView;
use crate::pointer::PointerState;
use crate::requests::SceneRequest;
use crate::scene_rng::SceneRng;
use crate::ships::{Ship, ShipId};
use crate::status::StatusMessage;
use crate::{SceneSet, ScenePlugin};

pub const FRAME: Duration = Duration::from_nanos(16_666_667);

/// Every `GameLaunched` seen since the scene was built.
#[derive(Resource, Debug, Default)]
pub struct LaunchLog(pub Vec<GameLaunched>);

fn record_launches(mut events: EventReader<GameLaunched>, mut log: ResMut<LaunchLog>) {
    log.0.extend(events.read().cloned());
}

pub struct TestScene {
    app: App,
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}

impl TestScene {
    /// Authored catalog and fleet, camera at the overview, seed 42.
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.insert_resource(SceneRng::from_seed_u64(seed));
        app.add_plugins(ScenePlugin);
        app.init_resource::<LaunchLog>();
        app.add_systems(Update, record_launches.in_set(SceneSet::Visual));

        app.world_mut().spawn((
            RigCamera,
            Transform::from_translation(OVERVIEW_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        ));

        // Startup systems (ship spawn) run on the first update.
        app.update();
        Self { app }
    }

    /// Remove every ship, e.g. to exercise the ship-follow fallback.
    pub fn without_ships(mut self) -> Self {
        let world = self.app.world_mut();
        let ships: Vec<Entity> = world
            .query_filtered::<Entity, With<Ship>>()
            .iter(world)
            .collect();
        for entity in ships {
            world.despawn(entity);
        }
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    pub fn request(&mut self, request: SceneRequest) -> &mut Self {
        self.app.world_mut().send_event(request);
        self
    }

    pub fn build(&mut self, request: BuildRequest) -> &mut Self {
        self.app.world_mut().send_event(request);
        self
    }

    pub fn activity(&mut self) -> &mut Self {
        self.app.world_mut().send_event(UserActivity);
        self
    }

    /// Stand in for the rendering crate's ground raycast.
    pub fn set_ground_hit(&mut self, hit: Option<Vec3>) -> &mut Self {
        self.app.world_mut().resource_mut::<PointerState>().ground_hit = hit;
        self
    }

    pub fn tick(&mut self, frames: u32) -> &mut Self {
        for _ in 0..frames {
            self.app.update();
        }
        self
    }

    /// Step until the current transition converges. Returns the number of
    /// frames it took, or `None` if it did not happen within `max_frames`.
    pub fn tick_until_converged(&mut self, max_frames: u32) -> Option<u32> {
        for frame in 1..=max_frames {
            self.app.update();
            if !self.state().animation_in_flight {
                return Some(frame);
            }
        }
        None
    }

    pub fn despawn_ship(&mut self, id: ShipId) -> bool {
        let world = self.app.world_mut();
        let found = world
            .query::<(Entity, &Ship)>()
            .iter(world)
            .find(|(_, ship)| ship.id == id)
            .map(|(entity, _)| entity);
        match found {
            Some(entity) => world.despawn(entity),
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn state(&self) -> &SceneState {
        self.app.world().resource::<SceneState>()
    }

    pub fn districts(&self) -> &DistrictRegistry {
        self.app.world().resource::<DistrictRegistry>()
    }

    pub fn build_mode(&self) -> &BuildMode {
        self.app.world().resource::<BuildMode>()
    }

    pub fn status(&self) -> &StatusMessage {
        self.app.world().resource::<StatusMessage>()
    }

    pub fn export_view(&self) -> &LayoutExportView {
        self.app.world().resource::<LayoutExportView>()
    }

    pub fn launches(&self) -> &[GameLaunched] {
        &self.app.world().resource::<LaunchLog>().0
    }

    pub fn district_position(&self, id: &str) -> Option<Vec3> {
        self.districts().get(id).map(|d| d.position)
    }

    pub fn camera(&mut self) -> Transform {
        let world = self.app.world_mut();
        world
            .query_filtered::<&Transform, With<RigCamera>>()
            .iter(world)
            .next()
            .copied()
            .unwrap_or_default()
    }

    pub fn ship_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query::<&Ship>().iter(world).count()
    }
}
