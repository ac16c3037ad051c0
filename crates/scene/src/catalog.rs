//! Authored world data: districts, the overlay dispatch table and the ship fleet.
//!
//! Positions here are what `LayoutExport` output is copied back into.

use bevy::math::Vec3;

use crate::district::{District, DistrictKind, DistrictTag, SubItem};
use crate::overlay::OverlayKind;
use crate::ships::PatrolRoute;

/// Tag → overlay mapping.
pub const TAG_OVERLAYS: &[(DistrictTag, OverlayKind)] = &[
    (DistrictTag::Ai, OverlayKind::OracleChat),
    (DistrictTag::Contact, OverlayKind::ContactHub),
    (DistrictTag::Game, OverlayKind::GameLobby),
];

/// Per-district overrides, checked before the tag mapping.
pub const ID_OVERLAYS: &[(&str, OverlayKind)] = &[("skills-matrix", OverlayKind::ProjectPanel)];

fn item(id: &str, title: &str, description: &str, image: Option<&str>, offset: Vec3) -> SubItem {
    SubItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: image.map(str::to_string),
        offset,
    }
}

pub fn authored_districts() -> Vec<District> {
    use DistrictKind::{Major, Minor};

    vec![
        District::new("skills-matrix", "Skills Matrix", Major, DistrictTag::Showcase, Vec3::new(-60.0, 0.0, -40.0))
            .with_summary("Languages, engines and tooling, arranged as a skyline.")
            .with_item(item("systems", "Systems", "Rust, C and low-level tooling.", None, Vec3::new(-8.0, 0.0, 0.0)))
            .with_item(item("graphics", "Graphics", "Real-time rendering and shaders.", Some("img/graphics.png"), Vec3::new(0.0, 0.0, 8.0)))
            .with_item(item("web", "Web", "Client-side apps and WebAssembly.", None, Vec3::new(8.0, 0.0, 0.0))),
        District::new("project-forge", "Project Forge", Major, DistrictTag::Showcase, Vec3::new(70.0, 0.0, -50.0))
            .with_summary("Shipped projects and case studies.")
            .with_focus(Vec3::new(100.0, 45.0, -5.0), Vec3::new(70.0, 8.0, -50.0))
            .with_item(item("engine", "Voxel Engine", "A chunked voxel renderer.", Some("img/engine.png"), Vec3::new(-6.0, 0.0, -6.0)))
            .with_item(item("compiler", "Toy Compiler", "An expression language compiled to bytecode.", None, Vec3::new(6.0, 0.0, 6.0))),
        District::new("oracle-spire", "Oracle Spire", Major, DistrictTag::Ai, Vec3::new(0.0, 0.0, 0.0))
            .with_summary("Ask the Oracle about anything in the city.")
            .with_focus(Vec3::new(0.0, 60.0, 55.0), Vec3::new(0.0, 25.0, 0.0)),
        District::new("contact-beacon", "Contact Beacon", Major, DistrictTag::Contact, Vec3::new(-90.0, 0.0, 70.0))
            .with_summary("Email, socials and a message form."),
        District::new("arcade-hangar", "Arcade Hangar", Major, DistrictTag::Game, Vec3::new(90.0, 0.0, 80.0))
            .with_summary("Launch a ship and fly through the skyline."),
        District::new("about-atrium", "About Atrium", Major, DistrictTag::Info, Vec3::new(20.0, 0.0, 100.0))
            .with_summary("Background, timeline and interests."),
        District::new("neon-market", "Neon Market", Minor, DistrictTag::Info, Vec3::new(-110.0, 0.0, -100.0)),
        District::new("transit-hub", "Transit Hub", Minor, DistrictTag::Info, Vec3::new(40.0, 0.0, 30.0)),
        District::new("data-farm", "Data Farm", Minor, DistrictTag::Info, Vec3::new(110.0, 0.0, -110.0)),
        District::new("skyline-park", "Skyline Park", Minor, DistrictTag::Info, Vec3::new(-30.0, 0.0, 60.0)),
    ]
}

/// Ambient ships. Only ships marked eligible can be picked for ship-follow.
pub fn authored_fleet() -> Vec<(bool, PatrolRoute)> {
    vec![
        (
            true,
            PatrolRoute {
                center: Vec3::ZERO,
                radius: 90.0,
                altitude: 45.0,
                angular_speed: 0.18,
                phase: 0.0,
            },
        ),
        (
            true,
            PatrolRoute {
                center: Vec3::new(40.0, 0.0, -20.0),
                radius: 60.0,
                altitude: 60.0,
                angular_speed: -0.25,
                phase: 1.7,
            },
        ),
        (
            false,
            PatrolRoute {
                center: Vec3::new(-50.0, 0.0, 30.0),
                radius: 35.0,
                altitude: 30.0,
                angular_speed: 0.4,
                phase: 3.1,
            },
        ),
    ]
}
