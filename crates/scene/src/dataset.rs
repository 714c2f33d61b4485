//! Joined dataset assembly.

use catalog::{AttributeCatalog, AttributeId};
use serde::{Deserialize, Serialize};

use crate::feature::RegionFeature;
use crate::join::{JoinReport, join_records};
use crate::record::Record;

/// The fully loaded inputs after the one-time record join.
///
/// Assembly requires both inputs together; partially loaded data is never
/// joined. Once assembled, features and records are read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    features: Vec<RegionFeature>,
    records: Vec<Record>,
}

impl Dataset {
    /// Runs the join and freezes the result.
    pub fn assemble(
        mut features: Vec<RegionFeature>,
        records: Vec<Record>,
        catalog: &AttributeCatalog,
    ) -> (Self, JoinReport) {
        let report = join_records(&mut features, &records, catalog);
        (Self { features, records }, report)
    }

    pub fn features(&self) -> &[RegionFeature] {
        &self.features
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.features.is_empty()
    }

    /// Per-record values for one attribute, in record order. Absent or
    /// unparsable source values appear as `None`.
    pub fn record_values(&self, id: &AttributeId) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.value(id)).collect()
    }
}
