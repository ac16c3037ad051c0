//! Districts: the places in the metropolis a visitor can travel to.
//!
//! The set of districts is fixed for the whole session. Only the build-mode
//! controller mutates `position` and `is_dirty`; everything else reads.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::catalog;

/// Whether a district is navigable content or ambient decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistrictKind {
    /// Navigable, has content, can be selected.
    Major,
    /// Decorative, never selectable.
    Minor,
}

/// Classification consumed by the overlay dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistrictTag {
    /// Hosts the Oracle conversational agent.
    Ai,
    Contact,
    /// Launches the minigame.
    Game,
    /// Portfolio showcase with sub-items.
    Showcase,
    /// Plain informational stop.
    Info,
}

/// Authored camera framing used verbatim when the district is selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusPoint {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// A content entry shown inside a district's project panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SubItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    /// Position relative to the owning district.
    pub offset: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct District {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub kind: DistrictKind,
    pub tag: DistrictTag,
    pub position: Vec3,
    /// Position the district was loaded with. Never changes.
    pub authored_position: Vec3,
    pub focus: Option<FocusPoint>,
    pub items: Vec<SubItem>,
    /// Set once the district has been moved in calibration mode.
    pub is_dirty: bool,
}

impl District {
    pub fn new(id: &str, title: &str, kind: DistrictKind, tag: DistrictTag, position: Vec3) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            summary: String::new(),
            kind,
            tag,
            position,
            authored_position: position,
            focus: None,
            items: Vec::new(),
            is_dirty: false,
        }
    }

    pub fn with_summary(mut self, summary: &str) -> Self {
        self.summary = summary.to_string();
        self
    }

    pub fn with_focus(mut self, position: Vec3, look_at: Vec3) -> Self {
        self.focus = Some(FocusPoint { position, look_at });
        self
    }

    pub fn with_item(mut self, item: SubItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn is_major(&self) -> bool {
        self.kind == DistrictKind::Major
    }
}

/// Every district in the world, in authored order, with an id index.
#[derive(Resource, Debug, Clone)]
pub struct DistrictRegistry {
    districts: Vec<District>,
    index: HashMap<String, usize>,
}

impl Default for DistrictRegistry {
    fn default() -> Self {
        Self::new(catalog::authored_districts())
    }
}

impl DistrictRegistry {
    /// Build a registry from authored data. Later duplicates of an id are
    /// dropped with a warning so lookups stay unambiguous.
    pub fn new(districts: Vec<District>) -> Self {
        let mut kept = Vec::with_capacity(districts.len());
        let mut index = HashMap::with_capacity(districts.len());
        for district in districts {
            if index.contains_key(&district.id) {
                warn!("DistrictRegistry: duplicate district id '{}' ignored", district.id);
                continue;
            }
            index.insert(district.id.clone(), kept.len());
            kept.push(district);
        }
        Self {
            districts: kept,
            index,
        }
    }

    pub fn get(&self, id: &str) -> Option<&District> {
        self.index.get(id).map(|&i| &self.districts[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut District> {
        self.index.get(id).map(|&i| &mut self.districts[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &District> {
        self.districts.iter()
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    /// A district can be selected only if it exists and is major.
    pub fn is_selectable(&self, id: &str) -> bool {
        self.get(id).is_some_and(District::is_major)
    }

    pub fn any_dirty(&self) -> bool {
        self.districts.iter().any(|d| d.is_dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistrictRegistry {
        DistrictRegistry::new(vec![
            District::new("a", "A", DistrictKind::Major, DistrictTag::Info, Vec3::ZERO),
            District::new("b", "B", DistrictKind::Minor, DistrictTag::Info, Vec3::X),
            District::new("a", "A again", DistrictKind::Major, DistrictTag::Ai, Vec3::Y),
        ])
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let registry = sample();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("a").map(|d| d.title.as_str()), Some("A"));
    }

    #[test]
    fn test_minor_districts_are_not_selectable() {
        let registry = sample();
        assert!(registry.is_selectable("a"));
        assert!(!registry.is_selectable("b"));
        assert!(!registry.is_selectable("missing"));
    }

    #[test]
    fn test_authored_position_tracks_initial_position() {
        let d = District::new("x", "X", DistrictKind::Major, DistrictTag::Info, Vec3::new(10.0, 2.0, -20.0));
        assert_eq!(d.authored_position, d.position);
        assert!(!d.is_dirty);
    }

    #[test]
    fn test_default_registry_loads_catalog() {
        let registry = DistrictRegistry::default();
        assert!(!registry.is_empty());
        assert!(registry.is_selectable("skills-matrix"));
        assert!(!registry.any_dirty());
    }
}
