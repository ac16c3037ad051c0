//! Build mode: pick a district up, drag it over the snapped grid, drop or cancel.
//!
//! Only one district can be held at a time. The pre-move position and dirty
//! flag are remembered so `cancel` undoes the whole drag, not just the last frame.

use bevy::prelude::*;

use crate::app_state::SceneState;
use crate::district::DistrictRegistry;
use crate::grid::GridSpec;
use crate::pointer::PointerState;

/// Pointer-driven build-mode commands, produced by the input router.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum BuildRequest {
    PickUp(String),
    Place,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeldDistrict {
    pub id: String,
    /// Position before the pick-up, restored by `cancel`.
    pub origin: Vec3,
    pub was_dirty: bool,
}

/// Cursor shape the rendering layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Grabbing,
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct BuildMode {
    held: Option<HeldDistrict>,
}

impl BuildMode {
    pub fn held(&self) -> Option<&HeldDistrict> {
        self.held.as_ref()
    }

    pub fn held_id(&self) -> Option<&str> {
        self.held.as_ref().map(|h| h.id.as_str())
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    pub fn cursor(&self) -> CursorStyle {
        if self.is_holding() {
            CursorStyle::Grabbing
        } else {
            CursorStyle::Default
        }
    }

    /// Start holding a district. Only valid while calibrating and when nothing
    /// else is held.
    pub fn pick_up(&mut self, id: &str, calibration_active: bool, districts: &DistrictRegistry) -> bool {
        if !calibration_active || self.held.is_some() {
            return false;
        }
        let Some(district) = districts.get(id) else {
            #[cfg(debug_assertions)]
            warn!("pick_up: unknown district '{id}'");
            return false;
        };
        self.held = Some(HeldDistrict {
            id: district.id.clone(),
            origin: district.position,
            was_dirty: district.is_dirty,
        });
        true
    }

    /// Move the held district to the snapped cell under `hit`. A missing hit
    /// leaves the district where it is. Height is never changed.
    pub fn drag_to(&mut self, hit: Option<Vec3>, grid: &GridSpec, districts: &mut DistrictRegistry) -> bool {
        let (Some(held), Some(hit)) = (self.held.as_ref(), hit) else {
            return false;
        };
        let Some(district) = districts.get_mut(&held.id) else {
            return false;
        };
        let snapped = grid.snap(hit.x, hit.z);
        let next = Vec3::new(snapped.x, district.position.y, snapped.y);
        if next == district.position {
            return false;
        }
        district.position = next;
        district.is_dirty = true;
        true
    }

    /// Drop the held district where it is.
    pub fn place(&mut self) -> Option<String> {
        self.held.take().map(|h| h.id)
    }

    /// Drop the held district back where it was picked up.
    pub fn cancel(&mut self, districts: &mut DistrictRegistry) -> Option<String> {
        let held = self.held.take()?;
        if let Some(district) = districts.get_mut(&held.id) {
            district.position = held.origin;
            district.is_dirty = held.was_dirty;
        }
        Some(held.id)
    }
}

/// System: apply routed build-mode requests.
pub fn apply_build_requests(
    mut requests: EventReader<BuildRequest>,
    state: Res<SceneState>,
    mut build: ResMut<BuildMode>,
    mut districts: ResMut<DistrictRegistry>,
) {
    for request in requests.read() {
        match request {
            BuildRequest::PickUp(id) => {
                if build.pick_up(id, state.calibration_active, &districts) {
                    debug!("build mode: holding '{id}'");
                }
            }
            BuildRequest::Place => {
                if let Some(id) = build.place() {
                    info!("build mode: placed '{id}'");
                }
            }
            BuildRequest::Cancel => {
                if let Some(id) = build.cancel(&mut districts) {
                    info!("build mode: restored '{id}'");
                }
            }
        }
    }
}

/// System: follow the pointer with the held district. A hold never outlives
/// build mode; it is cancelled if calibration ended some other way.
pub fn drag_held_district(
    state: Res<SceneState>,
    pointer: Res<PointerState>,
    grid: Res<GridSpec>,
    mut build: ResMut<BuildMode>,
    mut districts: ResMut<DistrictRegistry>,
) {
    if !build.is_holding() {
        return;
    }
    if !state.calibration_active {
        if let Some(id) = build.cancel(&mut districts) {
            warn!("build mode: '{id}' still held after calibration ended, restored");
        }
        return;
    }
    build.drag_to(pointer.ground_hit, &grid, &mut districts);
}
