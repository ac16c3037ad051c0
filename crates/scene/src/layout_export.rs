// ---------------------------------------------------------------------------
// Layout export: district positions for a human to copy back into the catalog
// ---------------------------------------------------------------------------

use std::fmt;

use bevy::prelude::*;
use serde::Serialize;

use crate::district::DistrictRegistry;

/// Errors from [`export_layout`].
#[derive(Debug)]
pub enum ExportError {
    /// No district has been moved, so there is nothing worth copying out.
    NothingDirty,
    /// JSON serialization failed.
    Serialize(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NothingDirty => write!(f, "Nothing to export: no district has been moved"),
            ExportError::Serialize(msg) => write!(f, "Layout serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Serialize(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutEntry {
    pub id: String,
    pub position: [f32; 3],
    pub is_dirty: bool,
}

/// Every district in authored order. The dirty flag tells moved districts
/// apart from untouched ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LayoutExport {
    pub entries: Vec<LayoutEntry>,
}

impl LayoutExport {
    pub fn dirty_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_dirty).count()
    }

    pub fn entry(&self, id: &str) -> Option<&LayoutEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn to_pretty_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn export_layout(districts: &DistrictRegistry) -> Result<LayoutExport, ExportError> {
    if !districts.any_dirty() {
        return Err(ExportError::NothingDirty);
    }
    let entries = districts
        .iter()
        .map(|d| LayoutEntry {
            id: d.id.clone(),
            position: d.position.to_array(),
            is_dirty: d.is_dirty,
        })
        .collect();
    Ok(LayoutExport { entries })
}

/// The most recent export, shown by the export-view overlay.
#[derive(Resource, Debug, Clone, Default)]
pub struct LayoutExportView {
    pub json: Option<String>,
    pub dirty_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn move_district(registry: &mut DistrictRegistry, id: &str, to: Vec3) {
        if let Some(d) = registry.get_mut(id) {
            d.position = to;
            d.is_dirty = true;
        }
    }

    #[test]
    fn test_nothing_dirty_is_an_error() {
        let registry = DistrictRegistry::default();
        assert!(matches!(export_layout(&registry), Err(ExportError::NothingDirty)));
    }

    #[test]
    fn test_export_includes_all_districts_with_dirty_flags() {
        let mut registry = DistrictRegistry::default();
        move_district(&mut registry, "skills-matrix", Vec3::new(10.0, 0.0, 20.0));
        move_district(&mut registry, "oracle-spire", Vec3::new(-30.0, 0.0, 40.0));

        let export = export_layout(&registry).expect("two districts moved");
        assert_eq!(export.entries.len(), registry.len());
        assert_eq!(export.dirty_count(), 2);

        let a = export.entry("skills-matrix").expect("present");
        assert_eq!(a.position, [10.0, 0.0, 20.0]);
        assert!(a.is_dirty);
        let c = export.entry("oracle-spire").expect("present");
        assert_eq!(c.position, [-30.0, 0.0, 40.0]);
        let b = export.entry("project-forge").expect("untouched districts are listed too");
        assert!(!b.is_dirty);

        let order: Vec<&str> = export.entries.iter().map(|e| e.id.as_str()).collect();
        let authored: Vec<&str> = registry.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(order, authored);
    }

    #[test]
    fn test_json_shape() {
        let mut registry = DistrictRegistry::default();
        move_district(&mut registry, "skills-matrix", Vec3::new(10.0, 0.0, 20.0));
        let json = export_layout(&registry)
            .and_then(|e| e.to_pretty_json())
            .expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let first = &value[0];
        assert_eq!(first["id"], "skills-matrix");
        assert_eq!(first["isDirty"], true);
        assert_eq!(first["position"][2], 20.0);
    }

    #[test]
    fn test_error_messages() {
        assert!(ExportError::NothingDirty.to_string().contains("Nothing to export"));
        assert!(ExportError::Serialize("boom".into()).to_string().contains("boom"));
    }
}
