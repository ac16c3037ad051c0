//! Overlay kinds and the authored dispatch table that decides which overlay a
//! district opens once the camera has arrived.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::catalog;
use crate::district::{District, DistrictTag};

/// The single overlay currently shown on top of the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverlayKind {
    #[default]
    None,
    ProjectPanel,
    /// Plain info display for districts without sub-items.
    DistrictInfo,
    OracleChat,
    ContactHub,
    GameLobby,
    ExportView,
}

impl OverlayKind {
    /// Overlays that make sense without a selected district.
    pub fn is_district_bound(self) -> bool {
        !matches!(
            self,
            OverlayKind::None | OverlayKind::GameLobby | OverlayKind::ExportView
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            OverlayKind::None => "None",
            OverlayKind::ProjectPanel => "Projects",
            OverlayKind::DistrictInfo => "Info",
            OverlayKind::OracleChat => "Oracle",
            OverlayKind::ContactHub => "Contact",
            OverlayKind::GameLobby => "Arcade",
            OverlayKind::ExportView => "Layout Export",
        }
    }
}

/// Maps districts to overlays. Per-id entries win over per-tag entries; a
/// district matching neither opens `ProjectPanel` when it has sub-items and
/// `DistrictInfo` otherwise.
#[derive(Resource, Debug, Clone, Default)]
pub struct OverlayDispatch {
    pub by_id: HashMap<String, OverlayKind>,
    pub by_tag: HashMap<DistrictTag, OverlayKind>,
}

impl OverlayDispatch {
    /// The dispatch table authored alongside the district catalog.
    pub fn authored() -> Self {
        let mut table = Self::default();
        for (tag, overlay) in catalog::TAG_OVERLAYS {
            table.by_tag.insert(*tag, *overlay);
        }
        for (id, overlay) in catalog::ID_OVERLAYS {
            table.by_id.insert((*id).to_string(), *overlay);
        }
        table
    }

    pub fn resolve(&self, district: &District) -> OverlayKind {
        if let Some(&overlay) = self.by_id.get(&district.id) {
            return overlay;
        }
        if let Some(&overlay) = self.by_tag.get(&district.tag) {
            return overlay;
        }
        if district.items.is_empty() {
            OverlayKind::DistrictInfo
        } else {
            OverlayKind::ProjectPanel
        }
    }
}
