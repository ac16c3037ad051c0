//! Build-mode placement grid and the snapping rule.
//!
//! Snapping clamps the raw hit to the grid's half-extent, then rounds each
//! axis to the nearest multiple of the cell size. When the rounded value lands
//! past the half-extent (odd division counts put cell multiples off the edge)
//! it is pulled back one cell toward the origin, so a snapped district never
//! leaves the grid.

use bevy::prelude::*;

use crate::config::{GRID_DIVISIONS, GRID_HEIGHT, GRID_SIZE};

/// Tie-break used when a coordinate lies exactly halfway between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapRounding {
    /// -12.5 → -13, 12.5 → 13.
    #[default]
    HalfAwayFromZero,
    /// -12.5 → -12, 13.5 → 14.
    HalfEven,
}

impl SnapRounding {
    fn round(self, v: f32) -> f32 {
        match self {
            SnapRounding::HalfAwayFromZero => v.round(),
            SnapRounding::HalfEven => v.round_ties_even(),
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub size: f32,
    pub divisions: u32,
    /// Y level of the ground plane.
    pub height: f32,
    pub rounding: SnapRounding,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            divisions: GRID_DIVISIONS,
            height: GRID_HEIGHT,
            rounding: SnapRounding::default(),
        }
    }
}

impl GridSpec {
    pub fn cell_size(&self) -> f32 {
        self.size / self.divisions.max(1) as f32
    }

    pub fn half_extent(&self) -> f32 {
        self.size / 2.0
    }

    /// Snap a single axis value.
    pub fn snap_axis(&self, v: f32) -> f32 {
        let cell = self.cell_size();
        let half = self.half_extent();
        let clamped = v.clamp(-half, half);
        let mut snapped = self.rounding.round(clamped / cell) * cell;
        if snapped.abs() > half {
            snapped -= cell * snapped.signum();
        }
        snapped
    }

    /// Snap a ground-plane hit to the nearest in-bounds cell (X/Z).
    pub fn snap(&self, x: f32, z: f32) -> Vec2 {
        Vec2::new(self.snap_axis(x), self.snap_axis(z))
    }
}
