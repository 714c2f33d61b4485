//! Tabular records: one row of regional statistics.

use std::collections::BTreeMap;
use std::fmt;

use catalog::AttributeId;
use serde::{Deserialize, Serialize};

/// Unique identifier joining a tabular record to a spatial feature
/// (e.g. a state abbreviation). Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionKey(String);

impl RegionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// One decoded row: region key, optional display name, and the numeric
/// values that survived decoding.
///
/// A value that failed numeric parsing is simply absent; readers see
/// `None` and must treat it as "no data", never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub key: RegionKey,
    pub name: Option<String>,
    values: BTreeMap<AttributeId, f64>,
}

impl Record {
    pub fn new(key: impl Into<RegionKey>, name: Option<String>) -> Self {
        Self {
            key: key.into(),
            name,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style value insertion, mainly for tests and tools.
    pub fn with_value(mut self, id: impl Into<AttributeId>, value: f64) -> Self {
        self.set_value(id.into(), value);
        self
    }

    pub fn set_value(&mut self, id: AttributeId, value: f64) {
        self.values.insert(id, value);
    }

    pub fn value(&self, id: &AttributeId) -> Option<f64> {
        self.values.get(id).copied()
    }

    /// Stored values in attribute-id order.
    pub fn values(&self) -> impl Iterator<Item = (&AttributeId, f64)> {
        self.values.iter().map(|(id, v)| (id, *v))
    }
}
