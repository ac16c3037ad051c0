//! Per-frame hot path of the camera rig and build mode.
//!
//! Run with: cargo bench -p scene

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bevy::prelude::*;

use scene::app_state::{PointOfView, SceneState};
use scene::camera_rig::{CameraRig, RigConfig};
use scene::camera_target::{resolve_target, AmbientMotion};
use scene::district::DistrictRegistry;
use scene::grid::{GridSpec, SnapRounding};
use scene::ships::ShipPose;

fn bench_resolve_target(c: &mut Criterion) {
    let districts = DistrictRegistry::default();
    let ambient = AmbientMotion {
        auto_rotate_angle: 0.3,
        hover: Some(Vec3::new(40.0, 0.0, 30.0)),
    };
    let selected = SceneState {
        point_of_view: PointOfView::DistrictFocus,
        selected_district: Some("skills-matrix".into()),
        ..SceneState::default()
    };
    let following = SceneState {
        point_of_view: PointOfView::ShipFollow,
        ..SceneState::default()
    };
    let ship = ShipPose {
        position: Vec3::new(60.0, 45.0, -10.0),
        rotation: Quat::from_rotation_y(0.8),
    };

    c.bench_function("resolve_target_overview", |b| {
        b.iter(|| resolve_target(black_box(&SceneState::default()), &districts, None, &ambient))
    });
    c.bench_function("resolve_target_district", |b| {
        b.iter(|| resolve_target(black_box(&selected), &districts, None, &ambient))
    });
    c.bench_function("resolve_target_ship", |b| {
        b.iter(|| resolve_target(black_box(&following), &districts, Some(ship), &ambient))
    });
}

fn bench_rig_step(c: &mut Criterion) {
    let districts = DistrictRegistry::default();
    let state = SceneState {
        point_of_view: PointOfView::DistrictFocus,
        selected_district: Some("project-forge".into()),
        animation_in_flight: true,
        transition_seq: 1,
        ..SceneState::default()
    };
    let target = resolve_target(&state, &districts, None, &AmbientMotion::default());
    let config = RigConfig::default();

    c.bench_function("rig_step_in_flight", |b| {
        let mut rig = CameraRig::default();
        let mut camera = Transform::from_xyz(0.0, 150.0, 230.0).looking_at(Vec3::ZERO, Vec3::Y);
        b.iter(|| rig.step(&mut camera, black_box(&target), &config, &state, 1.0 / 60.0))
    });
}

fn bench_snap(c: &mut Criterion) {
    let half_away = GridSpec::default();
    let half_even = GridSpec {
        rounding: SnapRounding::HalfEven,
        ..GridSpec::default()
    };
    let points: Vec<(f32, f32)> = (0..1000)
        .map(|i| {
            let f = i as f32;
            ((f * 7.3) % 400.0 - 200.0, (f * 3.1) % 400.0 - 200.0)
        })
        .collect();

    c.bench_function("grid_snap_1k_half_away", |b| {
        b.iter(|| {
            for &(x, z) in &points {
                black_box(half_away.snap(x, z));
            }
        })
    });
    c.bench_function("grid_snap_1k_half_even", |b| {
        b.iter(|| {
            for &(x, z) in &points {
                black_box(half_even.snap(x, z));
            }
        })
    });
}

criterion_group!(benches, bench_resolve_target, bench_rig_step, bench_snap);
criterion_main!(benches);
