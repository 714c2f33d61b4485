//! Merging tabular records into region features by shared key.
//!
//! The join runs once, after both inputs have fully loaded. It copies
//! every catalog attribute present on the matching record onto the
//! feature; everything else about the feature is left alone.

use std::collections::{BTreeMap, BTreeSet};

use catalog::AttributeCatalog;
use serde::{Deserialize, Serialize};

use crate::feature::RegionFeature;
use crate::record::{Record, RegionKey};

/// Summary of one join pass.
///
/// Ordering contract:
/// - `unmatched_features` follows feature input order;
/// - `unmatched_records` and `duplicate_record_keys` follow record input
///   order, first occurrence only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinReport {
    pub matched_features: usize,
    pub unmatched_features: Vec<RegionKey>,
    pub unmatched_records: Vec<RegionKey>,
    pub duplicate_record_keys: Vec<RegionKey>,
}

impl JoinReport {
    pub fn is_clean(&self) -> bool {
        self.unmatched_features.is_empty()
            && self.unmatched_records.is_empty()
            && self.duplicate_record_keys.is_empty()
    }
}

/// Copies attribute values from records onto features with the same key
/// (exact, case-sensitive string match).
///
/// Tie-break: when several records share a key, the last one in record
/// order wins. Features without a matching record keep their attributes
/// unset; consumers must treat unset as "no data", never as zero.
/// Joining twice with the same inputs yields the same feature state.
pub fn join_records(
    features: &mut [RegionFeature],
    records: &[Record],
    catalog: &AttributeCatalog,
) -> JoinReport {
    let feature_keys: BTreeSet<RegionKey> = features.iter().map(|f| f.key.clone()).collect();

    let mut by_key: BTreeMap<&RegionKey, &Record> = BTreeMap::new();
    let mut report = JoinReport::default();
    for record in records {
        if by_key.insert(&record.key, record).is_some()
            && !report.duplicate_record_keys.contains(&record.key)
        {
            report.duplicate_record_keys.push(record.key.clone());
        }
        if !feature_keys.contains(&record.key)
            && !report.unmatched_records.contains(&record.key)
        {
            report.unmatched_records.push(record.key.clone());
        }
    }

    for feature in features.iter_mut() {
        let Some(record) = by_key.get(&feature.key) else {
            report.unmatched_features.push(feature.key.clone());
            continue;
        };
        for id in catalog.ids() {
            if let Some(value) = record.value(id) {
                feature.set_value(id.clone(), value);
            }
        }
        report.matched_features += 1;
    }

    report
}
