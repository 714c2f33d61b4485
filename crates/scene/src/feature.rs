//! Spatial region features.

use std::collections::BTreeMap;

use catalog::AttributeId;
use serde::{Deserialize, Serialize};

use crate::record::RegionKey;

/// A spatial region: opaque geometry plus joinable properties.
///
/// The geometry belongs to the mapping/rendering layer and is carried
/// through untouched; nothing here ever looks inside it. The joined
/// attribute values are the mutable part, written exactly once by the
/// record join at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionFeature {
    pub key: RegionKey,
    pub name: Option<String>,
    pub geometry: serde_json::Value,
    values: BTreeMap<AttributeId, f64>,
}

impl RegionFeature {
    pub fn new(key: impl Into<RegionKey>, name: Option<String>, geometry: serde_json::Value) -> Self {
        Self {
            key: key.into(),
            name,
            geometry,
            values: BTreeMap::new(),
        }
    }

    pub fn set_value(&mut self, id: AttributeId, value: f64) {
        self.values.insert(id, value);
    }

    /// Joined value for one attribute; `None` means "no data".
    pub fn value(&self, id: &AttributeId) -> Option<f64> {
        self.values.get(id).copied()
    }

    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }

    /// Joined values in attribute-id order.
    pub fn values(&self) -> impl Iterator<Item = (&AttributeId, f64)> {
        self.values.iter().map(|(id, v)| (id, *v))
    }
}
