//! Overlay vocabularies and the selection/fallback policy shared by all views.
//!
//! Each view gets its own table mapping a selection key to an image path.
//! Unknown keys and failed loads both land on the table's default resource.

use crate::constants::DEFAULT_TEXTURE;
use crate::error::{LunarError, Result};
use fnv::{FnvHashMap, FnvHashSet};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayEntry {
    pub key: String,
    pub label: String,
    pub resource: String,
}

impl OverlayEntry {
    pub fn new(key: &str, label: &str, resource: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            resource: resource.to_string(),
        }
    }
}

fn intensity_map(tag: &str) -> String {
    format!("/assets/Lunar_Surface_Map_with_{tag}_Intensity_Polygon_Overlay_E000N0000.png")
}

/// Ordered selection table for one view.
#[derive(Clone, Debug)]
pub struct OverlayTable {
    entries: Vec<OverlayEntry>,
    index: FnvHashMap<String, usize>,
    default_resource: String,
}

impl OverlayTable {
    /// Build a table, rejecting repeated keys or resources.
    pub fn new(entries: Vec<OverlayEntry>, default_resource: impl Into<String>) -> Result<Self> {
        let default_resource = default_resource.into();
        if default_resource.is_empty() {
            return Err(LunarError::EmptyDefaultResource);
        }
        let mut seen = FnvHashSet::default();
        for e in &entries {
            if !seen.insert(e.resource.as_str()) {
                return Err(LunarError::DuplicateOverlayResource(e.resource.clone()));
            }
        }
        let mut index = FnvHashMap::default();
        for (i, e) in entries.iter().enumerate() {
            if index.insert(e.key.clone(), i).is_some() {
                return Err(LunarError::DuplicateOverlayKey(e.key.clone()));
            }
        }
        Ok(Self {
            entries,
            index,
            default_resource,
        })
    }

    // Presets are fixed and distinct; validated in tests.
    fn preset(entries: Vec<OverlayEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key.clone(), i))
            .collect();
        Self {
            entries,
            index,
            default_resource: DEFAULT_TEXTURE.to_string(),
        }
    }

    /// Element-ratio maps draped on the globe.
    pub fn globe() -> Self {
        Self::preset(vec![
            OverlayEntry::new("Al/Mg", "Al/Mg", &intensity_map("Mg_Al")),
            OverlayEntry::new("Mg/Si", "Mg/Si", &intensity_map("Mg_Si")),
            OverlayEntry::new("Al/Si", "Al/Si", &intensity_map("Al_Si")),
        ])
    }

    /// Oxide abundance textures for the flat view.
    pub fn oxides() -> Self {
        Self::preset(vec![
            OverlayEntry::new("FeO", "FeO", "/assets/feO_texture.jpg"),
            OverlayEntry::new("CaO", "CaO", "/assets/caO_texture.jpg"),
            OverlayEntry::new("MgO", "MgO", "/assets/mgO_texture.jpg"),
            OverlayEntry::new("SiO2", "SiO2", "/assets/siO2_texture.jpg"),
            OverlayEntry::new("Al2O3", "Al2O3", "/assets/al2O3_texture.jpg"),
            OverlayEntry::new("TiO2", "TiO2", "/assets/tiO2_texture.jpg"),
            OverlayEntry::new("Na2O", "Na2O", "/assets/na2O_texture.jpg"),
        ])
    }

    /// Single-element intensity maps for the sub-pixel view.
    pub fn elements() -> Self {
        let elements = ["Al", "Cl", "Mg", "Na", "O", "P", "S", "Si"];
        Self::preset(
            elements
                .iter()
                .map(|el| OverlayEntry::new(el, el, &intensity_map(el)))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[OverlayEntry] {
        &self.entries
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn default_resource(&self) -> &str {
        &self.default_resource
    }

    /// Resource for `key`, or the default for anything outside the table.
    pub fn resolve(&self, key: &str) -> &str {
        match self.index.get(key) {
            Some(&i) => &self.entries[i].resource,
            None => &self.default_resource,
        }
    }
}

/// Holds the active resource for a view.
#[derive(Clone, Debug)]
pub struct OverlaySelector {
    table: OverlayTable,
    current: String,
}

impl OverlaySelector {
    /// Start on `initial_key`, or on the default resource when `None`.
    pub fn new(table: OverlayTable, initial_key: Option<&str>) -> Self {
        let current = match initial_key {
            Some(key) => table.resolve(key).to_string(),
            None => table.default_resource().to_string(),
        };
        Self { table, current }
    }

    pub fn table(&self) -> &OverlayTable {
        &self.table
    }

    pub fn resolve(&self, key: &str) -> &str {
        self.table.resolve(key)
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_default(&self) -> bool {
        self.current == self.table.default_resource()
    }

    pub fn select(&mut self, key: &str) -> &str {
        if !self.table.contains(key) {
            log::warn!("[overlay] unknown key {key:?}; using default");
        }
        self.current = self.table.resolve(key).to_string();
        log::debug!("[overlay] {key} -> {}", self.current);
        &self.current
    }

    /// Switch to the default resource. Never retries the failed one.
    pub fn on_resource_load_failure(&mut self) -> &str {
        log::warn!(
            "[overlay] failed to load {}; falling back to {}",
            self.current,
            self.table.default_resource()
        );
        self.current = self.table.default_resource().to_string();
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        for table in [
            OverlayTable::globe(),
            OverlayTable::oxides(),
            OverlayTable::elements(),
        ] {
            let rebuilt = OverlayTable::new(table.entries().to_vec(), table.default_resource());
            assert!(rebuilt.is_ok(), "{:?}", rebuilt.err());
        }
    }

    #[test]
    fn duplicate_key_rejected() {
        let err = OverlayTable::new(
            vec![
                OverlayEntry::new("a", "a", "/1.png"),
                OverlayEntry::new("a", "a", "/2.png"),
            ],
            "/d.png",
        )
        .unwrap_err();
        assert_eq!(err, LunarError::DuplicateOverlayKey("a".into()));
    }

    #[test]
    fn duplicate_resource_rejected() {
        let err = OverlayTable::new(
            vec![
                OverlayEntry::new("a", "a", "/1.png"),
                OverlayEntry::new("b", "b", "/1.png"),
            ],
            "/d.png",
        )
        .unwrap_err();
        assert_eq!(err, LunarError::DuplicateOverlayResource("/1.png".into()));
    }

    #[test]
    fn empty_default_rejected() {
        assert_eq!(
            OverlayTable::new(Vec::new(), "").unwrap_err(),
            LunarError::EmptyDefaultResource
        );
    }

    #[test]
    fn globe_keys_map_to_ratio_maps() {
        let t = OverlayTable::globe();
        assert_eq!(
            t.resolve("Mg/Si"),
            "/assets/Lunar_Surface_Map_with_Mg_Si_Intensity_Polygon_Overlay_E000N0000.png"
        );
    }

    #[test]
    fn failure_lands_on_default_and_does_not_stick() {
        let mut s = OverlaySelector::new(OverlayTable::oxides(), Some("FeO"));
        assert_eq!(s.current(), "/assets/feO_texture.jpg");
        assert_eq!(s.on_resource_load_failure(), DEFAULT_TEXTURE);
        assert!(s.is_default());
        assert_eq!(s.select("TiO2"), "/assets/tiO2_texture.jpg");
    }
}
